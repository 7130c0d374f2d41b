use broadside::{Fleet, Ship, ShipType, NUM_SHIPS, SHIPS};

#[test]
fn test_register_hit_and_sunk() {
    let mut ship = Ship::new(ShipType::new("Test", 2));
    assert!(!ship.is_sunk());
    assert!(ship.register_hit());
    assert!(!ship.is_sunk());
    assert!(ship.register_hit());
    assert!(ship.is_sunk());
    // hit count never exceeds the size
    assert!(!ship.register_hit());
    assert_eq!(ship.hit_count(), 2);
}

#[test]
fn test_fleet_order_and_sizes() {
    let fleet = Fleet::new();
    let names: Vec<_> = fleet.ships().iter().map(|s| (s.name(), s.size())).collect();
    assert_eq!(
        names,
        vec![
            ("Carrier", 5),
            ("Battleship", 4),
            ("Cruiser", 3),
            ("Submarine", 3),
            ("Destroyer", 2)
        ]
    );
    assert_eq!(fleet.afloat(), NUM_SHIPS);
    assert!(!fleet.all_sunk());
}

#[test]
fn test_hits_fill_ships_in_fleet_order() {
    let mut fleet = Fleet::new();
    for i in 0..5 {
        let ship = fleet.attribute_hit().unwrap();
        assert_eq!(ship.name(), "Carrier");
        assert_eq!(ship.hit_count(), i + 1);
    }
    assert!(fleet.ships()[0].is_sunk());

    let ship = fleet.attribute_hit().unwrap();
    assert_eq!(ship.name(), "Battleship");
    assert_eq!(ship.hit_count(), 1);
    assert_eq!(fleet.afloat(), NUM_SHIPS - 1);
}

#[test]
fn test_all_sunk_after_every_segment() {
    let mut fleet = Fleet::new();
    let total: usize = SHIPS.iter().map(|s| s.length()).sum();
    for _ in 0..total {
        assert!(!fleet.all_sunk());
        fleet.attribute_hit().unwrap();
    }
    assert!(fleet.all_sunk());
    assert_eq!(fleet.afloat(), 0);
    assert!(fleet.attribute_hit().is_none());
}

#[test]
fn test_from_ships_keeps_hit_counts() {
    let ships = core::array::from_fn(|i| {
        let mut ship = Ship::new(SHIPS[i]);
        for _ in 0..SHIPS[i].length() {
            ship.register_hit();
        }
        ship
    });
    let fleet = Fleet::from_ships(ships);
    assert!(fleet.all_sunk());
}
