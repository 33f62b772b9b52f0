//! The bento showcase: an ordered grid of cards, each revealed on its own
//! schedule, one of which carries the orbit layout.

use crate::constants::{CARD_STAGGER_BASE_SEC, CARD_STAGGER_STEP_SEC};
use crate::error::{check_timing, LayoutError, LayoutResult};
use crate::orbit::{OrbitLayout, OrbitSpec};
use crate::reveal::{RevealConfig, RevealPhase, RevealTrigger};
use crate::style::VisualStyle;
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSpan {
    Regular,
    Wide,
    Tall,
}

impl CardSpan {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Regular => "bento-regular",
            Self::Wide => "bento-wide",
            Self::Tall => "bento-tall",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Glyph name resolved by the icon provider.
    pub icon: &'static str,
    pub span: CardSpan,
    pub orbit: bool,
}

pub const SHOWCASE_CARDS: &[CardSpec] = &[
    CardSpec {
        id: "chat",
        title: "Ask your codebase",
        description: "Chat with any repository in plain English. Answers cite the files and lines they came from.",
        icon: "message-square",
        span: CardSpan::Wide,
        orbit: false,
    },
    CardSpec {
        id: "search",
        title: "Semantic code search",
        description: "Find code by what it does, not what it is called. Vector and keyword ranking over every indexed file.",
        icon: "search",
        span: CardSpan::Regular,
        orbit: false,
    },
    CardSpec {
        id: "graph",
        title: "Dependency graph",
        description: "See how modules connect before you open a single file.",
        icon: "git-branch",
        span: CardSpan::Tall,
        orbit: true,
    },
    CardSpec {
        id: "learning",
        title: "Guided learning paths",
        description: "Onboard faster with lessons generated from the repository's own structure.",
        icon: "graduation-cap",
        span: CardSpan::Regular,
        orbit: false,
    },
    CardSpec {
        id: "tours",
        title: "Code tours",
        description: "Walk through the important flows of a codebase one annotated file at a time.",
        icon: "map",
        span: CardSpan::Regular,
        orbit: false,
    },
    CardSpec {
        id: "challenges",
        title: "Challenges and streaks",
        description: "Check what you learned with quizzes built from real code, and keep your streak going.",
        icon: "trophy",
        span: CardSpan::Wide,
        orbit: false,
    },
];

/// Per-card reveal delays: `base + i * step`.
pub fn stagger_delays(count: usize, base_sec: f64, step_sec: f64) -> Vec<f64> {
    (0..count).map(|i| base_sec + i as f64 * step_sec).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    pub base_sec: f64,
    pub step_sec: f64,
    /// Template for every card; its `delay_sec` is replaced by the stagger.
    pub reveal: RevealConfig,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            base_sec: CARD_STAGGER_BASE_SEC,
            step_sec: CARD_STAGGER_STEP_SEC,
            reveal: RevealConfig::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShowcaseBlock {
    pub card: CardSpec,
    pub trigger: RevealTrigger,
}

/// Paint list produced by one frame: `(block index, style)`.
pub type BlockUpdates = SmallVec<[(usize, VisualStyle); 8]>;

#[derive(Clone, Debug)]
pub struct Showcase {
    blocks: Vec<ShowcaseBlock>,
    by_id: FnvHashMap<&'static str, usize>,
    orbit: Option<(usize, OrbitLayout)>,
    orbit_settled: bool,
}

impl Showcase {
    pub fn new(
        cards: &[CardSpec],
        stagger: &StaggerConfig,
        orbit_spec: &OrbitSpec,
    ) -> LayoutResult<Self> {
        check_timing("stagger base_sec", stagger.base_sec)?;
        check_timing("stagger step_sec", stagger.step_sec)?;

        let delays = stagger_delays(cards.len(), stagger.base_sec, stagger.step_sec);
        let mut by_id = FnvHashMap::default();
        let mut blocks = Vec::with_capacity(cards.len());
        let mut orbit = None;
        for (i, (card, delay)) in cards.iter().zip(delays).enumerate() {
            if by_id.insert(card.id, i).is_some() {
                return Err(LayoutError::DuplicateCard(card.id));
            }
            if card.orbit && orbit.is_none() {
                orbit = Some((i, OrbitLayout::from_spec(orbit_spec)?));
            } else if card.orbit {
                log::warn!("[showcase] only one orbit card is drawn, ignoring `{}`", card.id);
            }
            blocks.push(ShowcaseBlock {
                card: *card,
                trigger: RevealTrigger::new(stagger.reveal.with_delay(delay)),
            });
        }
        log::info!("[showcase] {} cards, orbit={}", blocks.len(), orbit.is_some());
        Ok(Self {
            blocks,
            by_id,
            orbit,
            orbit_settled: false,
        })
    }

    pub fn blocks(&self) -> &[ShowcaseBlock] {
        &self.blocks
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn orbit(&self) -> Option<(usize, &OrbitLayout)> {
        self.orbit.as_ref().map(|(i, layout)| (*i, layout))
    }

    /// Route one observation to the block with `id`. Returns `true` when
    /// that block's reveal fired, i.e. the element no longer needs watching.
    pub fn on_intersection(&mut self, id: &str, now_sec: f64, is_intersecting: bool) -> bool {
        let Some(i) = self.index_of(id) else {
            log::debug!("[showcase] observation for unknown block `{}`", id);
            return false;
        };
        let fired = self.blocks[i].trigger.on_intersection(now_sec, is_intersecting);
        if fired {
            log::debug!("[showcase] reveal `{}` at {:.3}s", id, now_sec);
        }
        fired
    }

    /// Every block has latched; nothing is left to observe.
    pub fn all_triggered(&self) -> bool {
        self.blocks.iter().all(|b| b.trigger.has_been_revealed())
    }

    /// Nothing left to paint, ever.
    pub fn is_settled(&self) -> bool {
        self.blocks.iter().all(|b| b.trigger.is_visible())
            && (self.orbit.is_none() || self.orbit_settled)
    }

    /// No frame would paint anything: no block is mid-reveal and the orbit
    /// is either untouched or already in its final place. Blocks still
    /// waiting to be scrolled into view do not count; the next reveal wakes
    /// the frame loop again.
    pub fn is_idle(&self) -> bool {
        let revealing = self
            .blocks
            .iter()
            .any(|b| matches!(b.trigger.phase(), RevealPhase::Revealing { .. }));
        let orbit_pending = !self.orbit_settled
            && self
                .orbit
                .as_ref()
                .is_some_and(|(i, _)| self.blocks[*i].trigger.has_been_revealed());
        !revealing && !orbit_pending
    }

    /// Advance every block and collect the ones that need painting.
    pub fn tick(&mut self, now_sec: f64) -> BlockUpdates {
        self.blocks
            .iter_mut()
            .enumerate()
            .filter_map(|(i, b)| b.trigger.tick(now_sec).map(|s| (i, s)))
            .collect()
    }

    /// Node styles for the orbit card, or `None` when there is nothing new
    /// to paint: the card has not started moving, or the nodes were already
    /// painted in their final place.
    pub fn orbit_styles(&mut self, now_sec: f64) -> Option<Vec<VisualStyle>> {
        if self.orbit_settled {
            return None;
        }
        let (block, layout) = self.orbit.as_ref()?;
        let elapsed = self.blocks[*block].trigger.elapsed_since_start(now_sec)?;
        if elapsed >= layout.settled_at() {
            self.orbit_settled = true;
        }
        Some(layout.nodes.iter().map(|n| n.style_at(elapsed)).collect())
    }
}
