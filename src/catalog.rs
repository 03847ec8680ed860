//! Normalization boundary for the drifted service-assignment encodings
//! (`services: [{"id": 1}]`, `serviceIds: [1, 2]`, `serviceIds: "1,2"`), plus
//! the eligibility filter behind the service pickers. Everything downstream
//! works on one canonical set of integer ids; malformed entries are dropped.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::models::{IdList, NailTech, Service, ServiceList, ServiceRef};

/// Canonical set of service ids a technician may perform. Precedence is
/// fixed: object list wins over id list over comma string; absent technician
/// or unrecognized encodings yield the empty set.
pub fn normalize_eligibility(tech: Option<&NailTech>) -> BTreeSet<i64> {
    let Some(tech) = tech else {
        return BTreeSet::new();
    };

    // only an actual array claims precedence; a drifted non-array `services`
    // value falls through to the `serviceIds` encodings
    if let Some(ServiceList::Refs(refs)) = &tech.services {
        return object_list_ids(refs);
    }

    match &tech.service_ids {
        Some(IdList::Ids(vals)) => scalar_ids(vals),
        Some(IdList::Csv(s)) => csv_ids(s),
        _ => BTreeSet::new(),
    }
}

/// Edit-hydration variant: the union of the object-list and id-list paths,
/// both attempted and merged. Diverges from [`normalize_eligibility`]'s
/// precedence on purpose to match how edits behaved historically.
pub fn hydrated_ids_union(tech: &NailTech) -> BTreeSet<i64> {
    let mut ids = match &tech.services {
        Some(ServiceList::Refs(refs)) => object_list_ids(refs),
        _ => BTreeSet::new(),
    };
    if let Some(IdList::Ids(vals)) = &tech.service_ids {
        ids.extend(scalar_ids(vals));
    }
    ids
}

// Object entries yield their `id`, bare entries stand for themselves, nulls
// drop. A literal 0 survives here; only the id-list path drops falsy.
pub(crate) fn object_list_ids(refs: &[ServiceRef]) -> BTreeSet<i64> {
    refs.iter()
        .filter_map(|r| match r {
            ServiceRef::Entry { id } => id.as_ref().filter(|v| !v.is_null()),
            ServiceRef::Bare(v) if !v.is_null() => Some(v),
            ServiceRef::Bare(_) => None,
        })
        .filter_map(coerce_id)
        .collect()
}

// Id-list path: falsy entries (null, 0, "") drop before coercion.
pub(crate) fn scalar_ids(vals: &[Value]) -> BTreeSet<i64> {
    vals.iter()
        .filter(|v| !is_falsy(v))
        .filter_map(coerce_id)
        .collect()
}

fn csv_ids(s: &str) -> BTreeSet<i64> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse().ok())
        .collect()
}

fn coerce_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub services: Vec<Service>,
}

/// Selectable services grouped by category, in first-seen category order.
/// `eligible = None` means no technician is selected and the whole catalog
/// passes; an empty eligible set yields an empty grouping, which the UI shows
/// as an explicit "no services available" state.
pub fn filter_and_group(
    catalog: &[Service],
    eligible: Option<&BTreeSet<i64>>,
) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for svc in catalog {
        if let Some(allowed) = eligible {
            if !allowed.contains(&svc.id) {
                continue;
            }
        }
        let category = svc.category_or_default();
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.services.push(svc.clone()),
            None => groups.push(CategoryGroup {
                category: category.to_string(),
                services: vec![svc.clone()],
            }),
        }
    }
    groups
}

#[derive(Debug, Clone, Default)]
pub struct OfferedSplit {
    pub offered: Vec<CategoryGroup>,
    pub not_offered: Vec<Service>,
}

pub fn split_offered(catalog: &[Service], tech: &NailTech) -> OfferedSplit {
    let offered_ids = normalize_eligibility(Some(tech));
    OfferedSplit {
        offered: filter_and_group(catalog, Some(&offered_ids)),
        not_offered: catalog
            .iter()
            .filter(|s| !offered_ids.contains(&s.id))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tech(extra: serde_json::Value) -> NailTech {
        let mut base = json!({"id": 1, "name": "Linh"});
        base.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(base).unwrap()
    }

    fn svc(id: i64, name: &str, category: Option<&str>) -> Service {
        Service {
            id,
            name: name.to_string(),
            category: category.map(str::to_string),
        }
    }

    fn ids(v: &[i64]) -> BTreeSet<i64> {
        v.iter().copied().collect()
    }

    #[test]
    fn test_three_encodings_agree() {
        let a = tech(json!({"services": [{"id": 1}, {"id": 2}]}));
        let b = tech(json!({"serviceIds": [1, 2]}));
        let c = tech(json!({"serviceIds": "1,2"}));

        assert_eq!(normalize_eligibility(Some(&a)), ids(&[1, 2]));
        assert_eq!(normalize_eligibility(Some(&b)), ids(&[1, 2]));
        assert_eq!(normalize_eligibility(Some(&c)), ids(&[1, 2]));
    }

    #[test]
    fn test_no_technician_is_empty() {
        assert!(normalize_eligibility(None).is_empty());
    }

    #[test]
    fn test_no_assignment_fields_is_empty() {
        let t = tech(json!({}));
        assert!(normalize_eligibility(Some(&t)).is_empty());
    }

    #[test]
    fn test_object_list_wins_over_id_list() {
        let t = tech(json!({"services": [{"id": 5}], "serviceIds": [1, 2]}));
        assert_eq!(normalize_eligibility(Some(&t)), ids(&[5]));
    }

    #[test]
    fn test_object_list_accepts_bare_ids_and_drops_null() {
        let t = tech(json!({"services": [{"id": 1}, 2, null, {"id": null}, {}]}));
        assert_eq!(normalize_eligibility(Some(&t)), ids(&[1, 2]));
    }

    #[test]
    fn test_object_list_keeps_zero() {
        let t = tech(json!({"services": [{"id": 0}, {"id": 3}]}));
        assert_eq!(normalize_eligibility(Some(&t)), ids(&[0, 3]));
    }

    #[test]
    fn test_id_list_drops_falsy_entries() {
        let t = tech(json!({"serviceIds": [0, null, "", 4, "7"]}));
        assert_eq!(normalize_eligibility(Some(&t)), ids(&[4, 7]));
    }

    #[test]
    fn test_csv_trims_and_drops_empties() {
        let t = tech(json!({"serviceIds": " 1 , ,2,, junk ,3"}));
        assert_eq!(normalize_eligibility(Some(&t)), ids(&[1, 2, 3]));
    }

    #[test]
    fn test_unrecognized_encoding_is_empty() {
        let t = tech(json!({"serviceIds": 42}));
        assert!(normalize_eligibility(Some(&t)).is_empty());
    }

    #[test]
    fn test_non_array_services_does_not_poison_roster_decode() {
        // one drifted record must not fail the whole roster response
        let techs: Vec<NailTech> = serde_json::from_value(json!([
            {"id": 1, "name": "Linh", "services": [{"id": 5}]},
            {"id": 2, "name": "Mai", "services": "drifted-garbage"},
            {"id": 3, "name": "Ana", "services": {"id": 7}},
        ]))
        .unwrap();
        assert_eq!(normalize_eligibility(Some(&techs[0])), ids(&[5]));
        assert!(normalize_eligibility(Some(&techs[1])).is_empty());
        assert!(normalize_eligibility(Some(&techs[2])).is_empty());
    }

    #[test]
    fn test_non_array_services_falls_through_to_id_list() {
        let t = tech(json!({"services": "garbage", "serviceIds": [1, 2]}));
        assert_eq!(normalize_eligibility(Some(&t)), ids(&[1, 2]));
    }

    #[test]
    fn test_hydration_union_merges_both_paths() {
        let t = tech(json!({"services": [{"id": 5}], "serviceIds": [1, 5, 9]}));
        assert_eq!(hydrated_ids_union(&t), ids(&[1, 5, 9]));
    }

    #[test]
    fn test_hydration_union_ignores_non_array_services() {
        let t = tech(json!({"services": 7, "serviceIds": [1]}));
        assert_eq!(hydrated_ids_union(&t), ids(&[1]));
    }

    #[test]
    fn test_hydration_union_ignores_csv() {
        let t = tech(json!({"serviceIds": "1,2"}));
        assert!(hydrated_ids_union(&t).is_empty());
    }

    fn catalog() -> Vec<Service> {
        vec![
            svc(1, "Gel Manicure", Some("Manicure")),
            svc(2, "Classic Pedicure", Some("Pedicure")),
            svc(3, "French Manicure", Some("Manicure")),
            svc(4, "Nail Art", None),
        ]
    }

    #[test]
    fn test_no_technician_keeps_whole_catalog() {
        let groups = filter_and_group(&catalog(), None);
        let total: usize = groups.iter().map(|g| g.services.len()).sum();
        assert_eq!(total, 4);
        let cats: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(cats, ["Manicure", "Pedicure", "Other"]);
    }

    #[test]
    fn test_empty_eligibility_yields_empty_grouping() {
        let none = BTreeSet::new();
        assert!(filter_and_group(&catalog(), Some(&none)).is_empty());
    }

    #[test]
    fn test_filter_keeps_only_eligible() {
        let allowed = ids(&[2, 3]);
        let groups = filter_and_group(&catalog(), Some(&allowed));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Pedicure");
        assert_eq!(groups[1].category, "Manicure");
        assert_eq!(groups[1].services[0].name, "French Manicure");
    }

    #[test]
    fn test_catalog_order_preserved_within_bucket() {
        let groups = filter_and_group(&catalog(), None);
        let manicure = &groups[0];
        let names: Vec<_> = manicure.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Gel Manicure", "French Manicure"]);
    }

    #[test]
    fn test_split_offered_partitions_catalog() {
        let t = tech(json!({"serviceIds": [1, 4]}));
        let split = split_offered(&catalog(), &t);
        let offered: usize = split.offered.iter().map(|g| g.services.len()).sum();
        assert_eq!(offered, 2);
        assert_eq!(split.not_offered.len(), 2);
        let not_offered: Vec<_> = split.not_offered.iter().map(|s| s.id).collect();
        assert_eq!(not_offered, [2, 3]);
    }
}
