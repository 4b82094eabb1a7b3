use seabattle::{BitBoard, BitBoardError};

type BB = BitBoard<u64, 6>;

#[test]
fn test_get_set_and_count() {
    let mut bb = BB::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    bb.set(5, 0).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(0, 0).unwrap());
    assert_eq!(bb.count_ones(), 2);

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_out_of_range_indices() {
    let mut bb = BB::new();
    assert!(matches!(
        bb.set(6, 0),
        Err(BitBoardError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        bb.get(0, 6),
        Err(BitBoardError::IndexOutOfBounds { .. })
    ));
    // contains treats out-of-range as unset
    assert!(!bb.contains(6, 6));
}

#[test]
fn test_cells_iterates_in_row_major_order() {
    let mut bb = BB::new();
    bb.set(3, 3).unwrap();
    bb.set(0, 1).unwrap();
    bb.set(3, 0).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(0, 1), (3, 0), (3, 3)]);
}

#[test]
fn test_set_operations() {
    let mut a = BB::new();
    a.set(0, 0).unwrap();
    a.set(1, 1).unwrap();
    let mut b = BB::new();
    b.set(1, 1).unwrap();
    b.set(2, 2).unwrap();

    assert_eq!((a & b).cells().collect::<Vec<_>>(), vec![(1, 1)]);
    assert_eq!((a | b).count_ones(), 3);

    let mut c = a;
    c |= b;
    assert_eq!(c.count_ones(), 3);
}
