//! Predicates for selecting close approaches.
//!
//! A query is a list of [`ApproachFilter`]s; an approach matches when every
//! filter matches. Filters on object attributes (diameter, hazard) never match
//! an unlinked approach.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::model::{ApproachEvent, CelestialObject};

/// How an attribute is compared with the filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Attribute equals the value.
    Eq,
    /// Attribute is at least the value.
    Ge,
    /// Attribute is at most the value.
    Le,
}

impl Comparison {
    /// Apply the comparison. Incomparable values (NaN) never match.
    pub fn apply<T: PartialOrd>(self, attribute: &T, value: &T) -> bool {
        match attribute.partial_cmp(value) {
            Some(Ordering::Equal) => true,
            Some(Ordering::Greater) => self == Comparison::Ge,
            Some(Ordering::Less) => self == Comparison::Le,
            None => false,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Comparison::Eq => "==",
            Comparison::Ge => ">=",
            Comparison::Le => "<=",
        }
    }
}

/// A single condition on an approach or its object.
#[derive(Debug, Clone, PartialEq)]
pub enum ApproachFilter {
    /// Calendar date of the approach (UTC).
    Date(Comparison, NaiveDate),
    /// Approach distance in au.
    Distance(Comparison, f64),
    /// Relative velocity in km/s.
    Velocity(Comparison, f64),
    /// Object diameter in km. Unknown diameters never match.
    Diameter(Comparison, f64),
    /// Object hazard flag.
    Hazardous(bool),
}

impl ApproachFilter {
    /// Whether `event` (and its object, if linked) satisfies this filter.
    pub fn matches(&self, event: &ApproachEvent, neo: Option<&CelestialObject>) -> bool {
        match self {
            ApproachFilter::Date(op, date) => op.apply(&event.time().date(), date),
            ApproachFilter::Distance(op, value) => op.apply(&event.distance(), value),
            ApproachFilter::Velocity(op, value) => op.apply(&event.velocity(), value),
            ApproachFilter::Diameter(op, value) => {
                neo.and_then(|n| n.diameter()).is_some_and(|d| op.apply(&d, value))
            }
            ApproachFilter::Hazardous(flag) => neo.is_some_and(|n| n.hazardous() == *flag),
        }
    }

    /// Short description, e.g. `distance <= 0.1`.
    pub fn describe(&self) -> String {
        match self {
            ApproachFilter::Date(op, date) => format!("date {} {}", op.symbol(), date),
            ApproachFilter::Distance(op, v) => format!("distance {} {}", op.symbol(), v),
            ApproachFilter::Velocity(op, v) => format!("velocity {} {}", op.symbol(), v),
            ApproachFilter::Diameter(op, v) => format!("diameter {} {}", op.symbol(), v),
            ApproachFilter::Hazardous(flag) => format!("hazardous == {}", flag),
        }
    }
}

/// User-facing query criteria, each optional.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

impl FilterCriteria {
    /// Create empty criteria, which match every approach.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only approaches on this date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Only approaches between these dates, inclusive.
    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Bound the approach distance (au).
    pub fn distance(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.distance_min = min;
        self.distance_max = max;
        self
    }

    /// Bound the relative velocity (km/s).
    pub fn velocity(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.velocity_min = min;
        self.velocity_max = max;
        self
    }

    /// Bound the object diameter (km).
    pub fn diameter(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.diameter_min = min;
        self.diameter_max = max;
        self
    }

    /// Require the object's hazard flag to equal `flag`.
    pub fn hazardous(mut self, flag: bool) -> Self {
        self.hazardous = Some(flag);
        self
    }

    /// Expand into individual filters.
    pub fn into_filters(self) -> Vec<ApproachFilter> {
        use ApproachFilter as F;
        use Comparison as C;

        let mut filters = Vec::new();
        filters.extend(self.date.map(|d| F::Date(C::Eq, d)));
        filters.extend(self.start_date.map(|d| F::Date(C::Ge, d)));
        filters.extend(self.end_date.map(|d| F::Date(C::Le, d)));
        filters.extend(self.distance_min.map(|v| F::Distance(C::Ge, v)));
        filters.extend(self.distance_max.map(|v| F::Distance(C::Le, v)));
        filters.extend(self.velocity_min.map(|v| F::Velocity(C::Ge, v)));
        filters.extend(self.velocity_max.map(|v| F::Velocity(C::Le, v)));
        filters.extend(self.diameter_min.map(|v| F::Diameter(C::Ge, v)));
        filters.extend(self.diameter_max.map(|v| F::Diameter(C::Le, v)));
        filters.extend(self.hazardous.map(F::Hazardous));
        filters
    }
}

/// Take at most `n` items. `None` and `Some(0)` mean no limit.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> std::iter::Take<I> {
    match n {
        Some(n) if n > 0 => iter.take(n),
        _ => iter.take(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;

    fn event(cd: &str, distance: f64, velocity: f64) -> ApproachEvent {
        ApproachEvent::new("433", time::parse(cd).unwrap(), distance, velocity)
    }

    fn date(s: &str) -> NaiveDate {
        time::parse_date(s).unwrap()
    }

    #[test]
    fn test_comparison() {
        assert!(Comparison::Eq.apply(&1.0, &1.0));
        assert!(!Comparison::Eq.apply(&1.0, &2.0));
        assert!(Comparison::Ge.apply(&2.0, &1.0));
        assert!(Comparison::Ge.apply(&1.0, &1.0));
        assert!(!Comparison::Ge.apply(&0.5, &1.0));
        assert!(Comparison::Le.apply(&0.5, &1.0));
        assert!(!Comparison::Le.apply(&f64::NAN, &1.0));
    }

    #[test]
    fn test_date_filters() {
        let e = event("2020-Jan-01 23:59", 0.1, 5.0);
        assert!(ApproachFilter::Date(Comparison::Eq, date("2020-01-01")).matches(&e, None));
        assert!(!ApproachFilter::Date(Comparison::Eq, date("2020-01-02")).matches(&e, None));
        assert!(ApproachFilter::Date(Comparison::Ge, date("2020-01-01")).matches(&e, None));
        assert!(!ApproachFilter::Date(Comparison::Le, date("2019-12-31")).matches(&e, None));
    }

    #[test]
    fn test_neo_filters_need_link() {
        let e = event("2020-Jan-01 05:30", 0.1, 5.0);
        let neo = CelestialObject::new("433", None, Some(16.84), true);
        let unknown = CelestialObject::new("433", None, None, true);

        let big = ApproachFilter::Diameter(Comparison::Ge, 10.0);
        assert!(big.matches(&e, Some(&neo)));
        assert!(!big.matches(&e, Some(&unknown)));
        assert!(!big.matches(&e, None));

        assert!(ApproachFilter::Hazardous(true).matches(&e, Some(&neo)));
        assert!(!ApproachFilter::Hazardous(false).matches(&e, Some(&neo)));
        assert!(!ApproachFilter::Hazardous(false).matches(&e, None));
    }

    #[test]
    fn test_into_filters() {
        let filters = FilterCriteria::new()
            .distance(None, Some(0.1))
            .velocity(Some(10.0), None)
            .hazardous(false)
            .into_filters();

        assert_eq!(
            filters,
            vec![
                ApproachFilter::Distance(Comparison::Le, 0.1),
                ApproachFilter::Velocity(Comparison::Ge, 10.0),
                ApproachFilter::Hazardous(false),
            ]
        );
        assert!(FilterCriteria::new().into_filters().is_empty());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            ApproachFilter::Distance(Comparison::Le, 0.1).describe(),
            "distance <= 0.1"
        );
        assert_eq!(
            ApproachFilter::Date(Comparison::Eq, date("2020-01-01")).describe(),
            "date == 2020-01-01"
        );
    }

    #[test]
    fn test_limit() {
        assert_eq!(limit(0..10, Some(3)).count(), 3);
        assert_eq!(limit(0..10, Some(0)).count(), 10);
        assert_eq!(limit(0..10, None).count(), 10);
        assert_eq!(limit(0..2, Some(5)).count(), 2);
    }
}
