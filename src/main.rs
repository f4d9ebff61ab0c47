use jsonpath_deepscan::{errors::JSONPathError, Environment, JsonCodec, Query};

fn main() -> Result<(), JSONPathError> {
    env_logger::init();

    let codec = JsonCodec::new();
    let env = Environment::standard();

    let data = r#"
        {
            "name": "John Doe",
            "phones": [
                "+44 1234567",
                "+44 2345678"
            ],
            "friends": [
                {"name": "foo", "tags": ["a", "b"]},
                {"name": "bar", "tags": []},
                {"name": "baz", "tags": ["c"]}
            ]
        }"#;

    let v = codec.parse(data)?;

    for q in [
        Query::root().deep_scan([0, -1]),
        Query::root().wildcard().deep_scan([0, 1]),
    ] {
        let rv = q.find(&v, &env)?;
        println!("{}", q);
        println!("{}", codec.render(&rv)?);
        for path in rv.paths() {
            println!("  {}", path);
        }
    }

    Ok(())
}
