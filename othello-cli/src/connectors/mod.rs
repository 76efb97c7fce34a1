//! Connectors choose moves for one side of the game.

mod computer;
mod connector;
mod human;

pub use computer::ComputerConnector;
pub use connector::Connector;
pub use human::HumanConnector;
