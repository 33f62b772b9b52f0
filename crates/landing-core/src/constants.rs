// Shared reveal/layout tuning constants for the showcase grid.

// Reveal timing (seconds)
pub const REVEAL_DURATION_SEC: f64 = 0.5; // hidden -> visible interpolation length
pub const CARD_STAGGER_BASE_SEC: f64 = 0.0; // first card starts right away
pub const CARD_STAGGER_STEP_SEC: f64 = 0.1; // each following card waits a bit longer

// Hidden state offset (px); cards rise into place
pub const HIDDEN_OFFSET_Y_PX: f32 = 20.0;

// Orbit layout (dependency graph mock)
pub const ORBIT_ANGLES_DEG: [f32; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];
pub const ORBIT_RADIUS_X: f32 = 100.0; // px, wider than tall to suit the card aspect
pub const ORBIT_RADIUS_Y: f32 = 80.0; // px
pub const ORBIT_BASE_DELAY_SEC: f64 = 0.5; // after the card itself has revealed
pub const ORBIT_DELAY_STEP_SEC: f64 = 0.1; // per node index
pub const ORBIT_APPEAR_DURATION_SEC: f64 = 0.5;
