use yeok_core::Mapping;

mod import_tests;

pub(crate) fn mapping(entries: &[(&str, &[&str])]) -> Mapping {
    entries
        .iter()
        .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
        .collect()
}
