use broadside::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u128, 10, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { cells: 9, capacity: 8 })));
}

#[test]
fn test_rectangular_indexing() {
    let mut bb = BitBoard::<u32, 3, 5>::new();
    bb.set(2, 4).unwrap();
    assert!(bb.get(2, 4).unwrap());
    assert_eq!(bb.count_ones(), 1);
    assert_eq!(
        bb.set(3, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 3, col: 0 }
    );
    assert!(bb.get(0, 5).is_err());

    bb.clear(2, 4).unwrap();
    assert!(bb.is_empty());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4, 4>::from_cells([(3, 3), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_footprint_is_clipped_block() {
    let corner = BitBoard::<u128, 10, 10>::from_cells([(0, 0)]).unwrap();
    let fp = corner.footprint();
    assert_eq!(fp.count_ones(), 4);
    assert!(fp.get(1, 1).unwrap());

    let middle = BitBoard::<u128, 10, 10>::from_cells([(5, 5), (5, 6)]).unwrap();
    assert_eq!(middle.footprint().count_ones(), 12);
}

#[test]
fn test_intersects_and_not() {
    let a = BitBoard::<u16, 4, 4>::from_cells([(1, 1)]).unwrap();
    let b = BitBoard::<u16, 4, 4>::from_cells([(1, 1), (2, 2)]).unwrap();
    assert!(a.intersects(&b));
    assert!(!a.intersects(&!a));
    assert_eq!((!a).count_ones(), 15);
}
