pub mod game_record;
pub mod raw_row;

pub use game_record::{is_most_recent_first, order_most_recent_first, GameStatRecord};
pub use raw_row::{decode_rows, DefenseBlob, RawGameRow, ReceivingBlob, RushingBlob};
