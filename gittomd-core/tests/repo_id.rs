use gittomd_core::repo_id::RepoId;

struct TestCase {
    name: &'static str,
    input: &'static str,
    expected: Option<(&'static str, &'static str)>,
}

#[test]
fn test_parse_repo_identifiers_table_driven() {
    let cases = vec![
        TestCase {
            name: "shorthand",
            input: "rust-lang/cargo",
            expected: Some(("rust-lang", "cargo")),
        },
        TestCase {
            name: "shorthand with dots and underscores",
            input: "my_org/my.repo",
            expected: Some(("my_org", "my.repo")),
        },
        TestCase {
            name: "https url",
            input: "https://github.com/tokio-rs/tokio",
            expected: Some(("tokio-rs", "tokio")),
        },
        TestCase {
            name: "https url with .git and trailing slash",
            input: "https://github.com/owner/repo.git/",
            expected: Some(("owner", "repo")),
        },
        TestCase {
            name: "https url with extra path",
            input: "https://github.com/owner/repo/tree/main/src",
            expected: Some(("owner", "repo")),
        },
        TestCase {
            name: "https url with query",
            input: "https://github.com/owner/repo?tab=readme",
            expected: Some(("owner", "repo")),
        },
        TestCase {
            name: "ssh form",
            input: "git@github.com:owner/repo.git",
            expected: Some(("owner", "repo")),
        },
        TestCase {
            name: "other host",
            input: "https://gitlab.com/owner/repo",
            expected: None,
        },
        TestCase {
            name: "url with only owner",
            input: "https://github.com/owner",
            expected: None,
        },
        TestCase {
            name: "ssh without .git suffix",
            input: "git@github.com:owner/repo",
            expected: None,
        },
        TestCase {
            name: "scheme-less host path",
            input: "github.com/owner/repo",
            expected: None,
        },
        TestCase {
            name: "single word",
            input: "repo",
            expected: None,
        },
        TestCase {
            name: "empty",
            input: "",
            expected: None,
        },
    ];

    for case in cases {
        let parsed = RepoId::parse(case.input);
        let got = parsed.as_ref().map(|id| (id.owner.as_str(), id.repo.as_str()));
        assert_eq!(got, case.expected, "case '{}' ({:?})", case.name, case.input);
    }
}

#[test]
fn test_clone_url_and_display() {
    let id = RepoId::parse("git@github.com:owner/repo.git").unwrap();
    assert_eq!(id.clone_url(), "https://github.com/owner/repo.git");
    assert_eq!(id.to_string(), "owner/repo");
}
