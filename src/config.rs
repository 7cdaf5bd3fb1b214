use crate::vessel::VesselClass;

pub const GRID_SIZE: usize = 10;
pub const FLEET_SIZE: usize = 5;
pub const FLEET: [VesselClass; FLEET_SIZE] = [
    VesselClass::new("Carrier", 5),
    VesselClass::new("Battleship", 4),
    VesselClass::new("Cruiser", 3),
    VesselClass::new("Submarine", 3),
    VesselClass::new("Destroyer", 2),
];
