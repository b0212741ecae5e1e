pub mod game;
pub mod status;
pub mod tournament;
pub mod variant;

pub use game::{FishnetWorkType, GameType};
pub use status::{GameStatus, TournamentStatus};
pub use tournament::{pairing_system_name, PairingSystem};
pub use variant::{base_variant, is_960, variant_key, GRANDS, IMPORT_ONLY_VARIANTS, VARIANTS};
