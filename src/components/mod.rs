mod whiteboard;
pub use whiteboard::*;

mod hand_cursor;
pub use hand_cursor::*;

mod toolbar;
pub use toolbar::*;
