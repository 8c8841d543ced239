use serde::Deserialize;

/// Number of states shown in the top purchasers ranking.
pub const TOP_STATES: usize = 5;

/// One row of the state-wise purchase dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatePurchase {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Silver_Purchased_kg")]
    pub purchased_kg: f64,
}

/// Returns the `n` states with the largest purchases, largest first.
///
/// The sort is stable, so states with equal volumes keep their dataset order.
pub fn top_states(records: &[StatePurchase], n: usize) -> Vec<StatePurchase> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.purchased_kg.total_cmp(&a.purchased_kg));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchases(rows: &[(&str, f64)]) -> Vec<StatePurchase> {
        rows.iter()
            .map(|(state, kg)| StatePurchase {
                state: state.to_string(),
                purchased_kg: *kg,
            })
            .collect()
    }

    fn names(records: &[StatePurchase]) -> Vec<&str> {
        records.iter().map(|r| r.state.as_str()).collect()
    }

    #[test]
    fn test_top_five_states() {
        let data = purchases(&[
            ("A", 10.0),
            ("B", 50.0),
            ("C", 30.0),
            ("D", 5.0),
            ("E", 20.0),
            ("F", 60.0),
        ]);
        let top = top_states(&data, TOP_STATES);
        assert_eq!(names(&top), vec!["F", "B", "C", "E", "A"]);
        assert_eq!(
            top.iter().map(|r| r.purchased_kg).collect::<Vec<_>>(),
            vec![60.0, 50.0, 30.0, 20.0, 10.0]
        );
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let data = purchases(&[("X", 7.0), ("Y", 9.0), ("Z", 7.0), ("W", 7.0)]);
        let top = top_states(&data, 3);
        assert_eq!(names(&top), vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_fewer_records_than_n() {
        let data = purchases(&[("A", 1.0), ("B", 2.0)]);
        assert_eq!(names(&top_states(&data, TOP_STATES)), vec!["B", "A"]);
        assert!(top_states(&[], TOP_STATES).is_empty());
    }

    #[test]
    fn test_top_states_dominate_the_rest() {
        let data = purchases(&[
            ("A", 3.0),
            ("B", 14.0),
            ("C", 1.5),
            ("D", 9.0),
            ("E", 2.0),
            ("F", 11.0),
            ("G", 0.0),
            ("H", 9.0),
        ]);
        let top = top_states(&data, TOP_STATES);
        assert_eq!(top.len(), TOP_STATES);
        let floor = top
            .iter()
            .map(|r| r.purchased_kg)
            .fold(f64::INFINITY, f64::min);
        for rest in data.iter().filter(|r| !top.contains(r)) {
            assert!(rest.purchased_kg <= floor);
        }
    }
}
