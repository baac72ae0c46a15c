pub mod handler;
pub mod messages;

pub use handler::{
    run_ghost, run_hand_session, ConsoleInput, JsonPresenter, Presenter, TextPresenter,
    TurnSupplier,
};
pub use messages::GameEvent;
