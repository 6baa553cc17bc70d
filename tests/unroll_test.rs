use rand::Rng;
use toll_network::distance_matrix::distance_table::DistanceMatrix;
use toll_network::edge_set::EdgeSet;
use toll_network::error::TollError;
use toll_network::types::PointId;
use toll_network::unroll::{reaggregate_distance_matrix, unroll_distance_matrix, validate_unrolled_rows, UnrolledRow};

fn get_test_matrix() -> DistanceMatrix<PointId> {
    let edges = EdgeSet::from_triples(vec![(3, 1, 4.0), (1, 2, 10.0), (2, 3, 15.0), (2, 4, 1.5)]);
    DistanceMatrix::from_edges(&edges).unwrap()
}

#[test]
fn test_unroll_row_major_order() {
    let edges = EdgeSet::from_triples(vec![(2, 1, 10.0), (2, 3, 15.0)]);
    let rows = unroll_distance_matrix(&DistanceMatrix::from_edges(&edges).unwrap());

    let expected: Vec<(PointId, PointId, f64)> = vec![
        (1, 2, 10.0), (1, 3, 0.0),
        (2, 1, 10.0), (2, 3, 15.0),
        (3, 1, 0.0), (3, 2, 15.0)
    ];

    assert_eq!(rows.len(), expected.len());
    for (row, (id_start, id_end, distance)) in rows.iter().zip(expected) {
        assert_eq!(*row, UnrolledRow { id_start, id_end, distance });
    }
}

#[test]
fn test_unroll_never_emits_self_pairs() {
    let matrix = get_test_matrix();
    let rows = unroll_distance_matrix(&matrix);
    let num_points = matrix.len();

    assert_eq!(rows.len(), num_points * (num_points - 1));
    assert!(rows.iter().all(|row| row.id_start != row.id_end));
}

#[test]
fn test_unroll_is_deterministic() {
    let matrix = get_test_matrix();

    assert_eq!(unroll_distance_matrix(&matrix), unroll_distance_matrix(&matrix));
}

#[test]
fn test_unroll_small_matrices() {
    let empty = DistanceMatrix::from_edges(&EdgeSet::<PointId>::new(Vec::new())).unwrap();
    assert!(unroll_distance_matrix(&empty).is_empty());

    let single = DistanceMatrix::from_edges(&EdgeSet::from_triples(vec![(7, 7, 2.0)])).unwrap();
    assert_eq!(single.len(), 1);
    assert!(unroll_distance_matrix(&single).is_empty());
}

#[test]
fn test_reaggregate_reproduces_matrix() {
    let matrix = get_test_matrix();
    let reaggregated = reaggregate_distance_matrix(&unroll_distance_matrix(&matrix)).unwrap();

    assert_eq!(reaggregated, matrix);
}

#[test]
fn test_reaggregate_random_matrices() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let mut triples: Vec<(PointId, PointId, f64)> = (0..25).map(|_| (rng.gen_range(0..6), rng.gen_range(0..6), rng.gen_range(0.0..50.0))).collect();
        triples.push((0, 1, 1.0)); // at least two points

        let matrix = DistanceMatrix::from_edges(&EdgeSet::from_triples(triples)).unwrap();
        let reaggregated = reaggregate_distance_matrix(&unroll_distance_matrix(&matrix)).unwrap();

        assert_eq!(reaggregated, matrix);
    }
}

#[test]
fn test_reaggregate_sums_duplicate_rows() {
    let rows = vec![
        UnrolledRow { id_start: 1, id_end: 2, distance: 3.0 },
        UnrolledRow { id_start: 1, id_end: 2, distance: 4.0 },
        UnrolledRow { id_start: 2, id_end: 1, distance: 7.0 },
    ];
    let matrix: DistanceMatrix<PointId> = reaggregate_distance_matrix(&rows).unwrap();

    assert_eq!(matrix.get(&1, &2), Some(7.0));
    assert_eq!(matrix.get(&2, &1), Some(7.0));
}

#[test]
fn test_reaggregate_rejects_invalid_rows() {
    let asymmetric = vec![UnrolledRow { id_start: 1, id_end: 2, distance: 3.0 }];
    assert!(matches!(reaggregate_distance_matrix::<PointId>(&asymmetric), Err(TollError::InvalidInput(_))));

    let self_pair = vec![UnrolledRow { id_start: 1, id_end: 1, distance: 0.0 }];
    assert!(matches!(reaggregate_distance_matrix::<PointId>(&self_pair), Err(TollError::InvalidInput(_))));
}

#[test]
fn test_validate_unrolled_rows() {
    assert!(validate_unrolled_rows(&unroll_distance_matrix(&get_test_matrix())).is_ok());
    assert!(validate_unrolled_rows::<PointId>(&[]).is_ok());

    let negative = vec![UnrolledRow { id_start: 1, id_end: 2, distance: -10.0 }];
    assert!(matches!(validate_unrolled_rows(&negative), Err(TollError::InvalidInput(_))));

    let not_a_number = vec![
        UnrolledRow { id_start: 2, id_end: 1, distance: 10.0 },
        UnrolledRow { id_start: 1, id_end: 2, distance: f64::NAN },
    ];
    assert!(matches!(validate_unrolled_rows(&not_a_number), Err(TollError::InvalidInput(_))));
}
