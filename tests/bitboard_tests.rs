use broadside::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
    assert!(BitBoard::<u64, 8>::try_new().is_ok());

    let err = BitBoard::<u64, 10>::try_new();
    assert_eq!(
        err,
        Err(BitBoardError::SizeTooLarge {
            n: 10,
            capacity: 64
        })
    );
}

#[test]
fn test_get_set_and_bounds() {
    let mut bb = BitBoard::<u128, 10>::new();
    assert!(bb.is_empty());

    bb.set(9, 9).unwrap();
    assert!(bb.get(9, 9).unwrap());
    assert!(!bb.get(0, 0).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(10, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert_eq!(
        bb.get(0, 10),
        Err(BitBoardError::IndexOutOfBounds { row: 0, col: 10 })
    );
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);

    assert!(BitBoard::<u16, 4>::from_cells([(0, 0), (4, 0)]).is_err());
}

#[test]
fn test_combine_masks() {
    let a = BitBoard::<u128, 10>::from_cells([(0, 0), (0, 1)]).unwrap();
    let b = BitBoard::<u128, 10>::from_cells([(0, 1), (5, 5)]).unwrap();
    let c = BitBoard::<u128, 10>::from_cells([(9, 9)]).unwrap();

    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((a & b).iter_set_bits().collect::<Vec<_>>(), vec![(0, 1)]);
    assert!(!a.is_disjoint(&b));
    assert!(a.is_disjoint(&c));
}
