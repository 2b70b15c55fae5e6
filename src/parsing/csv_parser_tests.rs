#[cfg(test)]
mod tests {
    use crate::parsing::csv_parser::parse_catalog_csv;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn parses_two_column_catalog() {
        let csv_content = "\"Golden Wok\",\"Mon-Sun 11 am - 10 pm\"\n\"Night Owl Diner\",\"Fri-Sat 7 pm - 2 am\"\n";

        let temp_file = create_temp_csv(csv_content);
        let records = parse_catalog_csv(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Golden Wok");
        assert_eq!(records[0].raw_hours, "Mon-Sun 11 am - 10 pm");
        assert_eq!(records[1].name, "Night Owl Diner");
        assert_eq!(records[1].raw_hours, "Fri-Sat 7 pm - 2 am");
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let csv_content =
            "\"Soup, Salad & Co\",\"Mon-Thu, Sun 11:30 am - 10 pm / Sat 5:30 pm - 10 pm\"\n";

        let temp_file = create_temp_csv(csv_content);
        let records = parse_catalog_csv(temp_file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Soup, Salad & Co");
        assert_eq!(
            records[0].raw_hours,
            "Mon-Thu, Sun 11:30 am - 10 pm / Sat 5:30 pm - 10 pm"
        );
    }

    #[test]
    fn preserves_row_order() {
        let csv_content = "\"C\",\"Mon 9 am - 5 pm\"\n\"A\",\"Mon 9 am - 5 pm\"\n\"B\",\"Mon 9 am - 5 pm\"\n";

        let temp_file = create_temp_csv(csv_content);
        let records = parse_catalog_csv(temp_file.path()).unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn single_column_file_is_rejected() {
        let csv_content = "\"Golden Wok\"\n\"Night Owl Diner\"\n";

        let temp_file = create_temp_csv(csv_content);
        let result = parse_catalog_csv(temp_file.path());

        assert!(result.is_err(), "one-column catalog should be rejected");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = parse_catalog_csv(std::path::Path::new("no/such/catalog.csv"));
        assert!(result.is_err());
    }
}
