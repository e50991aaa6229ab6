use crate::ship::ShipClass;

pub const BOARD_WIDTH: i32 = 10;
pub const BOARD_HEIGHT: i32 = 10;

pub const FLEET_SIZE: usize = 5;
pub const FLEET: [ShipClass; FLEET_SIZE] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];
