// Scene units for the stylized atom (not physical scale)
pub const NUCLEUS_RADIUS_FLOOR: f32 = 0.12; // smallest nucleus sphere
pub const NUCLEUS_RADIUS_CAP: f32 = 0.35; // largest nucleus sphere
pub const NUCLEUS_FILL: f32 = 0.85; // keeps the outermost nucleons inside the sphere
pub const TIGHT_PACK_LIMIT: usize = 4; // nuclei up to this size use fixed slots

// Electron ring shape
pub const MAX_RING_ELECTRONS: u8 = 8; // electrons per ring before splitting
pub const RING_RADIUS_STEP: f32 = 0.1; // added per extra ring of one orbital
pub const RING_SPEED_STEP: f32 = 0.1; // speed factor per extra ring
pub const TILT_JITTER: f32 = 0.15; // radians either side of the ring tilt
pub const BASE_SPEED: f32 = 0.5; // divided by the principal quantum number
pub const FALLBACK_RADIUS_PER_SHELL: f32 = 1.2; // for orbitals outside the radius table
