//! Game state and the interaction layer, independent of any GUI

pub mod history;
pub mod interaction;
pub mod presenter;
pub mod state;

pub use history::History;
pub use interaction::{Action, Interaction};
pub use presenter::{describe_step, highlighted_cells, move_list, status, MoveEntry, Status};
pub use state::{GameState, ListOrder, MoveOutcome, Rejection};
