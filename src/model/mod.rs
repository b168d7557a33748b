pub mod aircraft;
pub mod location;
pub mod plan;
pub mod waypoint;

#[cfg(test)]
pub(crate) mod test_utils;
