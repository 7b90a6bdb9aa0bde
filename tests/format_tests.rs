//! Format-level tests: exact decode results, layout of encoded output,
//! and the error taxonomy.

use hron::{from_str, from_str_with_limit, hron, to_string, to_string_compact, Error, HronValue};

#[test]
fn test_tabular_document() {
    let value = from_str("users[{id,name}]: [{1,'a'},{2,'b'},{3,'c'}]").unwrap();
    assert_eq!(
        value,
        hron!({"users": [
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"},
            {"id": 3, "name": "c"}
        ]})
    );
}

#[test]
fn test_scalar_fields() {
    let value = from_str("a,b: 1,'two'").unwrap();
    assert_eq!(value, hron!({"a": 1, "b": "two"}));
}

#[test]
fn test_all_scalar_kinds() {
    let value = from_str("i,f,s,t,n: -3,2.5,'hi',true,null").unwrap();
    assert_eq!(
        value,
        hron!({"i": (-3), "f": 2.5, "s": "hi", "t": true, "n": null})
    );
}

#[test]
fn test_flat_list() {
    let value = from_str("hobbies[]: ['x','y']").unwrap();
    assert_eq!(value, hron!({"hobbies": ["x", "y"]}));
}

#[test]
fn test_empty_containers_roundtrip() {
    let text = "a[],b{}: [],{}";
    let value = from_str(text).unwrap();
    assert_eq!(value, hron!({"a": [], "b": {}}));
    assert_eq!(to_string_compact(&value).unwrap(), text);
}

#[test]
fn test_nested_object() {
    let value = from_str("person{name,address{city}}: {'Ada',{'London'}}").unwrap();
    assert_eq!(
        value,
        hron!({"person": {"name": "Ada", "address": {"city": "London"}}})
    );
}

#[test]
fn test_comments_and_whitespace_ignored() {
    let noisy = "\n# comment line\nusers[{id}] : # trailing\n  [ {1}, {2} ]\n";
    let plain = "users[{id}]: [{1},{2}]";
    assert_eq!(from_str(noisy).unwrap(), from_str(plain).unwrap());
}

#[test]
fn test_trailing_commas_tolerated() {
    assert_eq!(
        from_str("a,b,: 1,2,").unwrap(),
        from_str("a,b: 1,2").unwrap()
    );
}

#[test]
fn test_empty_schema_yields_empty_object() {
    let value = from_str(": {1,2}").unwrap();
    assert_eq!(value, hron!({}));
}

#[test]
fn test_unterminated_string_error() {
    assert!(matches!(
        from_str("name: 'unclosed"),
        Err(Error::UnterminatedString { .. })
    ));
}

#[test]
fn test_unexpected_character_error() {
    match from_str("a: @") {
        Err(Error::UnexpectedCharacter { character, offset }) => {
            assert_eq!(character, '@');
            assert_eq!(offset, 3);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_missing_colon_error() {
    assert!(matches!(
        from_str("a 1"),
        Err(Error::UnexpectedToken { .. })
    ));
}

#[test]
fn test_empty_input_error() {
    assert!(matches!(
        from_str(""),
        Err(Error::UnexpectedEndOfInput { .. })
    ));
}

#[test]
fn test_extra_values_error() {
    match from_str("{a}: {1,2}") {
        Err(Error::ExtraValues { count }) => assert_eq!(count, 1),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_schema_mismatch_error() {
    match from_str("items[{id}]: [5]") {
        Err(Error::SchemaMismatch {
            field,
            declared,
            actual,
        }) => {
            assert_eq!(field, "items");
            assert_eq!(declared, "object");
            assert_eq!(actual, "number");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_schema_mismatch_below_element_root() {
    // b declares an object one level inside the row shape.
    match from_str("a[{b{c}}]: [{5}]") {
        Err(Error::SchemaMismatch {
            field,
            declared,
            actual,
        }) => {
            assert_eq!(field, "b");
            assert_eq!(declared, "object");
            assert_eq!(actual, "number");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(
        from_str("a[{b{c}}]: [{{5}}]").unwrap(),
        hron!({"a": [{"b": {"c": 5}}]})
    );
}

#[test]
fn test_schema_mismatch_inside_nested_list() {
    assert!(matches!(
        from_str("grid[[{x}]]: [[5]]"),
        Err(Error::SchemaMismatch { .. })
    ));
    assert_eq!(
        from_str("grid[[{x}]]: [[{1},{2}]]").unwrap(),
        hron!({"grid": [[{"x": 1}, {"x": 2}]]})
    );
}

#[test]
fn test_depth_limit() {
    let mut deep = String::from("a: ");
    for _ in 0..200 {
        deep.push('[');
    }
    deep.push('1');
    for _ in 0..200 {
        deep.push(']');
    }
    assert!(matches!(
        from_str(&deep),
        Err(Error::DepthLimit { limit: 128 })
    ));
    assert!(from_str_with_limit(&deep, 300).is_ok());
}

#[test]
fn test_pretty_layout() {
    let value = hron!({"a": 1, "b": 2});
    assert_eq!(to_string(&value).unwrap(), "a,b: 1,\n  2");
}

#[test]
fn test_pretty_output_reparses() {
    let value = hron!({
        "name": "Ada",
        "tags": ["x", "y"],
        "address": {"city": "London", "zip": 123}
    });
    let text = to_string(&value).unwrap();
    assert_eq!(from_str(&text).unwrap(), value);
}

#[test]
fn test_number_formats() {
    let value = from_str("a,b,c: 10,2.0,-0.5").unwrap();
    assert_eq!(value.get("a"), Some(&HronValue::from(10)));
    assert_eq!(value.get("b"), Some(&HronValue::from(2.0)));
    assert_eq!(value.get("c"), Some(&HronValue::from(-0.5)));
    assert_eq!(to_string_compact(&value).unwrap(), "a,b,c: 10,2.0,-0.5");
}

#[test]
fn test_quote_styles() {
    let value = from_str("a,b: 'single',\"double\"").unwrap();
    assert_eq!(value, hron!({"a": "single", "b": "double"}));
}

#[test]
fn test_unnamed_root_object() {
    let value = from_str("{a,b}: {1,2}").unwrap();
    assert_eq!(value, hron!({"a": 1, "b": 2}));
}

#[test]
fn test_nested_lists() {
    let value = from_str("grid[[]]: [[1,2],[3]]").unwrap();
    assert_eq!(value, hron!({"grid": [[1, 2], [3]]}));
    assert_eq!(to_string_compact(&value).unwrap(), "grid[[]]: [[1,2],[3]]");
}

#[test]
fn test_display_renders_value_block() {
    let value = hron!({"a": 1, "b": "two"});
    assert_eq!(value.to_string(), "{1,'two'}");
    assert_eq!(HronValue::Null.to_string(), "null");
}
