/// Last path segment of a resource name, e.g. `listing42` from
/// `projects/p/locations/l/dataExchanges/e/listings/listing42`.
pub fn last_segment(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::last_segment;

    #[test]
    fn last_segment_takes_final_component() {
        assert_eq!(
            last_segment("projects/p/locations/l/dataExchanges/e/listings/listing42"),
            "listing42"
        );
        assert_eq!(last_segment("bare-name"), "bare-name");
        assert_eq!(last_segment(""), "");
    }
}
