/// Chart layer: aggregation of filtered views and chart-spec construction.
///
/// ```text
///   filtered records ──► aggregate ──► spec ──► ChartSpec (egui / JSON)
/// ```
///
/// Aggregations borrow from the dataset and hold no state of their own, so
/// calling them twice with the same inputs yields the same result.

pub mod aggregate;
pub mod spec;
