// File: crates/motion-core/tests/dimension.rs
// Purpose: Dimension allow-list validation, constant dimensions and construct-then-swap rebinding.

use motion_core::{ChartError, ColumnDescriptor, ColumnType, Dimension, DimensionName, Domain, Record, ScaleKind};

fn price() -> ColumnDescriptor { ColumnDescriptor::number("price", "Price") }
fn country() -> ColumnDescriptor { ColumnDescriptor::text("country", "Country") }

#[test]
fn names_parse_and_reject_unknowns() {
    assert_eq!("x".parse::<DimensionName>().unwrap(), DimensionName::X);
    assert_eq!("c".parse::<DimensionName>().unwrap(), DimensionName::C);
    assert_eq!("z".parse::<DimensionName>().unwrap_err(), ChartError::InvalidDimension("z".into()));
    assert_eq!("sqrt".parse::<ScaleKind>().unwrap(), ScaleKind::Sqrt);
    assert_eq!("log".parse::<ScaleKind>().unwrap_err(), ChartError::InvalidScale("log".into()));
}

#[test]
fn allow_list_accepts_exactly_the_valid_triples() {
    let accepted = [
        (DimensionName::X, ScaleKind::Linear, price()),
        (DimensionName::Y, ScaleKind::Linear, price()),
        (DimensionName::R, ScaleKind::Linear, price()),
        (DimensionName::R, ScaleKind::Sqrt, price()),
        (DimensionName::C, ScaleKind::Sequential, price()),
        (DimensionName::C, ScaleKind::Categorical, country()),
    ];
    for (dim, kind, col) in accepted {
        let bound = Dimension::bind(dim, &col, kind).unwrap();
        assert_eq!(bound.column(), Some(col.name.as_str()));
        assert_eq!(bound.label(), col.label);
        assert_eq!(bound.scale().kind(), kind);
    }

    let rejected = [
        (DimensionName::X, ScaleKind::Sqrt, price()),
        (DimensionName::Y, ScaleKind::Sequential, price()),
        (DimensionName::C, ScaleKind::Linear, price()),
        (DimensionName::C, ScaleKind::Categorical, price()),
        (DimensionName::C, ScaleKind::Sequential, country()),
        (DimensionName::R, ScaleKind::Categorical, country()),
    ];
    for (dim, kind, col) in rejected {
        assert!(matches!(Dimension::bind(dim, &col, kind), Err(ChartError::Incompatible { .. })), "{dim} {kind}");
    }
}

#[test]
fn incompatible_error_names_the_triple() {
    let err = Dimension::bind(DimensionName::X, &country(), ScaleKind::Linear).unwrap_err();
    assert_eq!(
        err,
        ChartError::Incompatible { dimension: "x".into(), scale: "linear".into(), column_type: ColumnType::Text }
    );
    assert_eq!(err.to_string(), "incompatible dimension \"x\", scale \"linear\", and type \"string\"");
}

#[test]
fn constant_dimension_ignores_the_record() {
    let dim = Dimension::bind(DimensionName::X, &country(), ScaleKind::Constant).unwrap();
    assert!(dim.is_constant());
    assert_eq!(dim.column(), None);

    let dim = dim.with_range_round([0.0, 300.0]);
    let a = Record::new().with("price", 1.0);
    let b = Record::new().with("price", 1e6).with("country", "KR");
    assert_eq!(dim.scaled(&a).as_number(), Some(150.0));
    assert_eq!(dim.scaled(&a), dim.scaled(&b));
    assert_eq!(dim.scaled(&Record::new()), dim.scaled(&b));
}

#[test]
fn raw_reads_the_bound_column() {
    let dim = Dimension::bind(DimensionName::Y, &price(), ScaleKind::Linear).unwrap();
    let rec = Record::new().with("price", 12.0);
    assert_eq!(dim.raw_number(&rec), Some(12.0));
    assert_eq!(dim.raw_number(&Record::new()), None);
    assert!(Dimension::constant().raw(&rec).is_null());
}

#[test]
fn rebinding_builds_new_values() {
    let base = Dimension::bind(DimensionName::X, &price(), ScaleKind::Linear).unwrap();
    let fitted = base.with_domain(Domain::Continuous([0.0, 10.0])).with_range_round([0.0, 100.0]);
    assert_ne!(base, fitted);
    assert_eq!(base.scale().domain(), Some(Domain::Continuous([0.0, 1.0])));
    assert_eq!(fitted.scale().domain(), Some(Domain::Continuous([0.0, 10.0])));
    assert_eq!(fitted.scaled(&Record::new().with("price", 2.5)).as_number(), Some(25.0));
}
