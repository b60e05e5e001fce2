pub mod change_point;
pub mod events;
pub mod prices;
