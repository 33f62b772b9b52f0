use crate::constants::*;
use crate::dom::{self, js_err};
use landing_core::{OrbitLayout, Showcase, ShowcaseBlock};
use web_sys as web;

/// Handles to the elements the frame loop repaints.
pub struct ShowcaseElements {
    pub blocks: Vec<web::Element>,
    pub orbit_nodes: Vec<web::Element>,
    pub orbit_lines: Vec<web::Element>,
}

/// Build every card into `grid`, each starting in its hidden style.
pub fn render_showcase(
    document: &web::Document,
    grid: &web::Element,
    showcase: &Showcase,
) -> anyhow::Result<ShowcaseElements> {
    grid.set_inner_html("");
    let mut out = ShowcaseElements {
        blocks: Vec::with_capacity(showcase.blocks().len()),
        orbit_nodes: Vec::new(),
        orbit_lines: Vec::new(),
    };
    let orbit = showcase.orbit();
    for (i, block) in showcase.blocks().iter().enumerate() {
        let card = render_card(document, block)?;
        if let Some((_, layout)) = orbit.filter(|(oi, _)| *oi == i) {
            let (nodes, lines) = render_orbit(document, &card, layout)?;
            out.orbit_nodes = nodes;
            out.orbit_lines = lines;
        }
        grid.append_child(&card).map_err(js_err)?;
        out.blocks.push(card);
    }
    Ok(out)
}

fn render_card(document: &web::Document, block: &ShowcaseBlock) -> anyhow::Result<web::Element> {
    let card = dom::element(
        document,
        "article",
        &format!("{} {}", CARD_CLASS, block.card.span.class_name()),
        None,
    )?;
    card.set_attribute(BLOCK_ID_ATTR, block.card.id).map_err(js_err)?;
    dom::set_style(&card, &block.trigger.config().hidden.to_css());

    let icon = dom::element(document, "i", ICON_CLASS, None)?;
    icon.set_attribute(ICON_ATTR, block.card.icon).map_err(js_err)?;
    let title = dom::element(document, "h3", CARD_TITLE_CLASS, Some(block.card.title))?;
    let body = dom::element(document, "p", CARD_BODY_CLASS, Some(block.card.description))?;
    card.append_child(&icon).map_err(js_err)?;
    card.append_child(&title).map_err(js_err)?;
    card.append_child(&body).map_err(js_err)?;
    Ok(card)
}

/// Centre marker plus one line and one node per orbit position. Nodes start
/// collapsed on the centre and transparent.
fn render_orbit(
    document: &web::Document,
    card: &web::Element,
    layout: &OrbitLayout,
) -> anyhow::Result<(Vec<web::Element>, Vec<web::Element>)> {
    let container = dom::element(document, "div", ORBIT_CLASS, None)?;
    let center = dom::element(document, "div", ORBIT_CENTER_CLASS, None)?;
    container.append_child(&center).map_err(js_err)?;

    let mut nodes = Vec::with_capacity(layout.len());
    let mut lines = Vec::with_capacity(layout.len());
    for node in &layout.nodes {
        let line = dom::element(document, "div", ORBIT_LINE_CLASS, None)?;
        dom::set_style(
            &line,
            &format!(
                "{};opacity:0",
                orbit_line_css(
                    node.position.x,
                    node.position.y,
                    node.line_rotation_deg,
                    node.line_length
                )
            ),
        );
        let el = dom::element(document, "div", ORBIT_NODE_CLASS, None)?;
        dom::set_style(&el, &node.style_at(0.0).to_css());
        container.append_child(&line).map_err(js_err)?;
        container.append_child(&el).map_err(js_err)?;
        lines.push(line);
        nodes.push(el);
    }
    card.append_child(&container).map_err(js_err)?;
    log::info!("[render] orbit with {} nodes", nodes.len());
    Ok((nodes, lines))
}
