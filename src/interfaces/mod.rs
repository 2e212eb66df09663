use crate::adapter::embedded::NumberDesc;

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
  /// Returns whether the given national number (a string containing only decimal
  /// digits) fully matches the national number pattern of the given description.
  fn match_national_number(&self, number: &str, number_desc: &NumberDesc) -> bool;
}
