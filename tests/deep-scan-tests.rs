use jsonpath_deepscan::{find, Environment, JsonCodec, Query, ScopeKind};

fn render(q: &Query, data: &str) -> String {
    let codec = JsonCodec::new();
    let value = codec.parse(data).unwrap();
    let rv = q.find(&value, &Environment::standard()).unwrap();
    codec.render(&rv).unwrap()
}

mod nested_lists {
    use super::*;

    const MIXED: &str = r#"[ {"a":1}, {"b":2}, [0,1,2, [ true, false ]] ]"#;
    const LISTS: &str = "[1,[2],[3,4],[5,6,7]]";
    const DEEPER: &str = "[1,[2],[3,4],[5,6,7,[8,9,10,11]]]";

    #[test]
    fn single_index() {
        assert_eq!(
            render(&Query::root().deep_scan([0]), MIXED),
            r#"[{"a":1},0,true]"#
        );
        assert_eq!(render(&Query::root().deep_scan([0]), LISTS), "[1,2,3,5]");
    }

    #[test]
    fn multiple_indices() {
        assert_eq!(
            render(&Query::root().deep_scan([0, 1]), MIXED),
            r#"[{"a":1},{"b":2},0,1,true,false]"#
        );
        assert_eq!(
            render(&Query::root().deep_scan([0, 1]), LISTS),
            "[1,[2],2,3,4,5,6]"
        );
    }

    #[test]
    fn negative_index() {
        assert_eq!(
            render(&Query::root().deep_scan([0, -1]), LISTS),
            "[1,[5,6,7],2,2,3,4,5,7]"
        );
    }

    #[test]
    fn after_wildcard() {
        assert_eq!(
            render(&Query::root().wildcard().deep_scan([0]), LISTS),
            "[2,3,5]"
        );
        assert_eq!(
            render(&Query::root().wildcard().deep_scan([0, 1]), LISTS),
            "[2,3,4,5,6]"
        );
        assert_eq!(
            render(&Query::root().wildcard().deep_scan([0, -1]), LISTS),
            "[2,2,3,4,5,7]"
        );
    }

    #[test]
    fn after_wildcard_nested() {
        assert_eq!(
            render(&Query::root().wildcard().deep_scan([0, 1]), DEEPER),
            "[2,3,4,5,6,8,9]"
        );
        assert_eq!(
            render(&Query::root().wildcard().deep_scan([0, -1]), DEEPER),
            "[2,2,3,4,5,[8,9,10,11],8,11]"
        );
    }
}

mod family {
    use super::*;

    const FAMILY: &str = r#"{
        "family": {
            "children": [
                {"name": "Thomas", "age": 13},
                {"name": "Mila", "age": 18},
                {"name": "Konstantin", "age": 29, "nickname": "Kons"},
                {"name": "Tracy", "age": 4}
            ]
        }
    }"#;

    #[test]
    fn scan_object_for_indices() {
        assert_eq!(
            render(&Query::root().deep_scan([0]), FAMILY),
            r#"[{"age":13,"name":"Thomas"}]"#
        );
        assert_eq!(
            render(&Query::root().deep_scan([0, 2]), FAMILY),
            r#"[{"age":13,"name":"Thomas"},{"age":29,"name":"Konstantin","nickname":"Kons"}]"#
        );
    }

    #[test]
    fn results_are_a_new_root() {
        let value = JsonCodec::new().parse(FAMILY).unwrap();
        let rv = find(&Query::root().deep_scan([0]), &value).unwrap();
        assert_eq!(rv.scope, ScopeKind::Wildcard);
        assert_eq!(rv.paths(), vec!["$['family']['children'][0]"]);
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn out_of_range_indices_are_skipped() {
        assert_eq!(render(&Query::root().deep_scan([5, -5]), "[1,[2,3]]"), "[]");
        assert_eq!(render(&Query::root().deep_scan([5, -2]), "[1,[2,3]]"), "[1,2]");
    }

    #[test]
    fn duplicate_selections_are_kept() {
        assert_eq!(render(&Query::root().deep_scan([0, -1, 0]), "[7]"), "[7,7,7]");
    }

    #[test]
    fn scalar_and_object_without_arrays() {
        assert_eq!(render(&Query::root().deep_scan([0]), "42"), "[]");
        assert_eq!(render(&Query::root().deep_scan([0]), r#""abc""#), "[]");
        assert_eq!(
            render(&Query::root().deep_scan([0]), r#"{"a": {"b": null}}"#),
            "[]"
        );
    }

    #[test]
    fn empty_index_list() {
        assert_eq!(render(&Query::root().deep_scan([]), "[[1], [[2]]]"), "[]");
    }

    #[test]
    fn object_members_searched_in_insertion_order() {
        assert_eq!(
            render(&Query::root().deep_scan([0]), r#"{"z": ["last"], "a": ["first"]}"#),
            r#"["last","first"]"#
        );
    }

    #[test]
    fn paths_of_duplicates() {
        let value = JsonCodec::new().parse("[1,[2],[3,4],[5,6,7]]").unwrap();
        let rv = find(&Query::root().deep_scan([0, -1]), &value).unwrap();
        assert_eq!(
            rv.paths(),
            vec!["$[0]", "$[3]", "$[1][0]", "$[1][0]", "$[2][0]", "$[2][1]", "$[3][0]", "$[3][2]"]
        );
    }
}
