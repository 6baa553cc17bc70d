pub type PointId = u64;
pub type Distance = f64;

/// (start index, end index, distance) triple over the sorted point axis
pub type IndexedEdge = (usize, usize, Distance);

/// key type of interval log records, negative ids occur in the logs
pub type IntervalKey = i64;
