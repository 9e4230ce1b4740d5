use rdb2rdf_commons::{
    equivalence::{
        literal_datatype,
        specific::{self, equivalent_specific_type, specific_equivalences},
        standard::{self, standard_equivalences},
    },
    error::{Error, SqlTypeError},
    sql::{SqlSpecificType, SqlType},
    DataType,
};

#[test]
fn column_types_to_literal_iris() {
    _ = env_logger::builder().is_test(true).try_init();

    let columns = [
        ("id", "int unsigned"),
        ("name", "varchar"),
        ("born", "date"),
        ("updated", "timestamptz"),
        ("flags", "varbit"),
    ];

    let iris = columns
        .iter()
        .map(|(_, column_type)| {
            literal_datatype(column_type, None)
                .unwrap()
                .map(|datatype| datatype.absolute_uri())
        })
        .collect::<Vec<_>>();

    assert_eq!(
        iris,
        vec![
            Some("http://www.w3.org/2001/XMLSchema#unsignedInt".to_string()),
            Some("http://www.w3.org/2001/XMLSchema#string".to_string()),
            Some("http://www.w3.org/2001/XMLSchema#date".to_string()),
            Some("http://www.w3.org/2001/XMLSchema#string".to_string()),
            Some("http://www.w3.org/2001/XMLSchema#int".to_string()),
        ]
    );
}

#[test]
fn jdbc_codes_to_datatypes() {
    assert_eq!(standard::equivalent_type_for_code(4), Ok(Some(DataType::Integer)));
    assert_eq!(specific::equivalent_type_for_code(91), Ok(Some(DataType::Date)));
    assert_eq!(standard::is_valid_sql_datatype(2005), Ok(false));
    assert_eq!(
        specific::is_valid_sql_datatype(4242),
        Err(SqlTypeError::UnknownCode(4242))
    );
}

#[test]
fn date_columns() {
    let date_columns = specific_equivalences()
        .filter(|(_, datatype)| datatype.is_date_type())
        .map(|(specific_type, _)| specific_type)
        .collect::<std::collections::BTreeSet<_>>();

    assert_eq!(
        date_columns.into_iter().collect::<Vec<_>>(),
        vec![
            SqlSpecificType::Date,
            SqlSpecificType::DateTime,
            SqlSpecificType::Timestamp
        ]
    );

    let standard_dates = standard_equivalences()
        .filter(|(_, datatype)| datatype.is_date_type())
        .count();
    assert_eq!(standard_dates, 2);
}

#[test]
fn no_column_type_becomes_wkt() {
    assert!(specific_equivalences().all(|(_, datatype)| datatype != DataType::WktLiteral));
    assert!(standard_equivalences().all(|(_, datatype)| datatype != DataType::WktLiteral));
}

#[test]
fn errors_render_the_offending_input() {
    let error = literal_datatype("geometry", None).unwrap_err();
    assert_eq!(error.to_string(), "unknown SQL type name: \"geometry\"");

    let error = literal_datatype("text", Some("xsd:string")).unwrap_err();
    assert!(matches!(error, Error::DataType(_)));
    assert_eq!(error.to_string(), "unknown data type: \"xsd:string\"");
}

#[test]
fn types_in_configuration() {
    #[derive(serde::Deserialize)]
    struct ColumnOverride {
        column: SqlSpecificType,
        standard: SqlType,
        datatype: DataType,
    }

    let overrides: Vec<ColumnOverride> = serde_json::from_str(
        r#"[
            { "column": "json", "standard": "VARCHAR", "datatype": "string" },
            { "column": "uuid", "standard": "CHAR", "datatype": "http://www.w3.org/2001/XMLSchema#string" }
        ]"#,
    )
    .unwrap();

    for entry in overrides {
        assert_eq!(equivalent_specific_type(entry.column), None);
        assert_eq!(standard::equivalent_type(entry.standard), Some(entry.datatype));
    }

    assert!(serde_json::from_str::<SqlSpecificType>("\"jsonb\"").is_err());
    assert!(serde_json::from_str::<SqlSpecificType>("\"JSON\"").is_err());
}
