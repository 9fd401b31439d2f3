//! Dynamic predicate composition for filtered queries.
//!
//! Each optional request filter is a tagged variant carrying its own SQL
//! fragment (with a single `$1` placeholder) and its bound value. The
//! builder folds over the active variants in a fixed priority order,
//! renumbering placeholders as it goes, so the composed statement can be
//! handed to the driver without further rewriting. Everything here is pure
//! and testable without a live database.

use water_common::{WaterError, WaterResult};

/// Fragment for the area-containment filter. Binds the whole key set as a
/// single `text[]` argument; `^@` is the starts-with operator, giving
/// prefix semantics over municipal area keys.
const AREA_TEMPLATE: &str = "(municipal_area).key::text ^@ ANY($1)";

/// Fragment for the active-state filter.
const ACTIVE_TEMPLATE: &str = "active = $1";

/// Fragment for the reality-state filter.
const REAL_TEMPLATE: &str = "\"real\" = $1";

/// A value bound to one placeholder of a composed query.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Bool(bool),
    TextArray(Vec<String>),
}

/// One active filter: its predicate fragment plus the value it binds.
#[derive(Debug, Clone)]
struct FilterDescriptor {
    template: &'static str,
    value: FilterValue,
}

/// The optional usage-location filters of one request.
///
/// Built fresh per request and never shared; an absent field means the
/// corresponding filter is inactive, not "false".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationFilter {
    /// Municipal area key prefixes; matches locations whose area key
    /// starts with any of them.
    pub area_keys: Option<Vec<String>>,
    pub active: Option<bool>,
    pub real: Option<bool>,
}

impl LocationFilter {
    /// Reject filters that are declared active but carry no usable value.
    pub fn validate(&self) -> WaterResult<()> {
        if let Some(keys) = &self.area_keys {
            if keys.is_empty() || keys.iter().any(|key| key.trim().is_empty()) {
                return Err(WaterError::EmptyFilterValue("in".to_string()));
            }
        }
        Ok(())
    }

    /// Descriptors in priority order: area containment, active state,
    /// reality state. Inactive filters stay `None`.
    fn descriptors(&self) -> [Option<FilterDescriptor>; 3] {
        [
            self.area_keys.clone().map(|keys| FilterDescriptor {
                template: AREA_TEMPLATE,
                value: FilterValue::TextArray(keys),
            }),
            self.active.map(|active| FilterDescriptor {
                template: ACTIVE_TEMPLATE,
                value: FilterValue::Bool(active),
            }),
            self.real.map(|real| FilterDescriptor {
                template: REAL_TEMPLATE,
                value: FilterValue::Bool(real),
            }),
        ]
    }
}

/// A composed statement and the values for its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedQuery {
    pub sql: String,
    pub arguments: Vec<FilterValue>,
}

/// Compose a base query (no `WHERE` clause) with every active filter.
///
/// The first active filter is introduced with `WHERE`, later ones with
/// `AND`; whether a predicate has been written is tracked with an explicit
/// flag, not by inspecting the query text. Each fragment's `$1` is
/// rewritten to the 1-based position of its argument, so placeholders come
/// out numbered `1..N` with no gaps and `N` equals the argument count.
pub fn compose(base: &str, filter: &LocationFilter) -> ComposedQuery {
    let mut sql = base.trim_end().trim_end_matches(';').to_string();
    let mut arguments: Vec<FilterValue> = Vec::new();
    let mut wrote_where = false;

    for descriptor in filter.descriptors().into_iter().flatten() {
        let keyword = if wrote_where { "AND" } else { "WHERE" };
        wrote_where = true;

        let placeholder = format!("${}", arguments.len() + 1);
        let fragment = descriptor.template.replacen("$1", &placeholder, 1);
        sql.push(' ');
        sql.push_str(keyword);
        sql.push(' ');
        sql.push_str(&fragment);

        arguments.push(descriptor.value);
    }

    ComposedQuery { sql, arguments }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "SELECT id FROM usage_locations";

    /// Collect the distinct `$N` placeholder indices of a statement.
    fn placeholder_indices(sql: &str) -> Vec<usize> {
        let mut indices = Vec::new();
        let bytes = sql.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if end > start {
                    indices.push(sql[start..end].parse().unwrap());
                }
                i = end;
            } else {
                i += 1;
            }
        }
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    fn filter(area: bool, active: bool, real: bool) -> LocationFilter {
        LocationFilter {
            area_keys: area.then(|| vec!["032".to_string(), "034".to_string()]),
            active: active.then_some(true),
            real: real.then_some(false),
        }
    }

    #[test]
    fn test_no_active_filters_leaves_base_unchanged() {
        let composed = compose(BASE, &LocationFilter::default());
        assert_eq!(composed.sql, BASE);
        assert!(composed.arguments.is_empty());
    }

    #[test]
    fn test_first_filter_gets_where() {
        let composed = compose(BASE, &filter(false, true, false));
        assert_eq!(
            composed.sql,
            "SELECT id FROM usage_locations WHERE active = $1"
        );
        assert_eq!(composed.arguments, vec![FilterValue::Bool(true)]);
    }

    #[test]
    fn test_later_filters_get_and() {
        let composed = compose(BASE, &filter(false, true, true));
        assert_eq!(
            composed.sql,
            "SELECT id FROM usage_locations WHERE active = $1 AND \"real\" = $2"
        );
        assert_eq!(composed.arguments.len(), 2);
    }

    #[test]
    fn test_area_filter_binds_single_array_argument() {
        let composed = compose(BASE, &filter(true, false, false));
        assert_eq!(placeholder_indices(&composed.sql), vec![1]);
        assert_eq!(
            composed.arguments,
            vec![FilterValue::TextArray(vec![
                "032".to_string(),
                "034".to_string()
            ])]
        );
    }

    #[test]
    fn test_priority_order_is_area_active_real() {
        let composed = compose(BASE, &filter(true, true, true));
        let area_at = composed.sql.find("municipal_area").unwrap();
        let active_at = composed.sql.find("active =").unwrap();
        let real_at = composed.sql.find("\"real\" =").unwrap();
        assert!(area_at < active_at && active_at < real_at);
    }

    #[test]
    fn test_placeholders_gapless_for_every_subset() {
        for mask in 0u8..8 {
            let filter = filter(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let composed = compose(BASE, &filter);

            let indices = placeholder_indices(&composed.sql);
            let expected: Vec<usize> = (1..=composed.arguments.len()).collect();
            assert_eq!(indices, expected, "subset mask {:#05b}", mask);
        }
    }

    #[test]
    fn test_base_semicolon_stripped() {
        let composed = compose("SELECT 1;", &filter(false, true, false));
        assert_eq!(composed.sql, "SELECT 1 WHERE active = $1");
    }

    #[test]
    fn test_validate_rejects_empty_area_keys() {
        let filter = LocationFilter {
            area_keys: Some(Vec::new()),
            ..Default::default()
        };
        assert!(matches!(
            filter.validate(),
            Err(WaterError::EmptyFilterValue(_))
        ));

        let filter = LocationFilter {
            area_keys: Some(vec!["  ".to_string()]),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_inactive_filters() {
        assert!(LocationFilter::default().validate().is_ok());
    }
}
