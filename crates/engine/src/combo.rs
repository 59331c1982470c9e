use blokie_core::Bitset81;

/// How many rows, columns and cubes lie entirely inside `region`. Called on
/// the board plus the new placement, before clearing, this is the number of
/// regions one move completes.
pub fn combo_magnitude(region: Bitset81) -> u32 {
    Bitset81::regions()
        .iter()
        .filter(|r| r.is_subset_of(region))
        .count() as u32
}
