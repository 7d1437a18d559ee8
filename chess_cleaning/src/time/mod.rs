pub mod epoch;
pub mod increment;

pub use epoch::{convert_epoch_millis_to_datetime, epoch_millis_to_datetime};
pub use increment::{summarize_increment_codes, GameSpeed, IncrementCode, IncrementSummary};
