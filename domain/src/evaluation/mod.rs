//! Evaluation: the heuristic quality metric and the built-in training set.

pub mod examples;
pub mod metric;

pub use examples::training_examples;
pub use metric::{METRIC_FLOOR, MetricContext, philosophical_metric, score_response, score_with_context};
