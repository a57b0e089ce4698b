//! Links to the detail page of a size table.

use crate::core::types::Gender;

/// Query appended when the detail page should show deviation results
pub const DEVIATION_RESULTS_QUERY: &str = "?visibleData=deviationResults";

/// Path of a table's detail page, `/clothing/{name}/{gender}`.
///
/// The name is inserted verbatim.
///
/// # Examples
///
/// ```
/// use size_solver::link::build_table_link;
/// use size_solver::core::types::Gender;
///
/// assert_eq!(build_table_link("pants", Gender::Male, false), "/clothing/pants/male");
/// assert_eq!(
///     build_table_link("pants", Gender::Male, true),
///     "/clothing/pants/male?visibleData=deviationResults"
/// );
/// ```
#[must_use]
pub fn build_table_link(name: &str, gender: Gender, show_deviation_details: bool) -> String {
    let mut link = format!("/clothing/{name}/{gender}");
    if show_deviation_details {
        link.push_str(DEVIATION_RESULTS_QUERY);
    }
    link
}
