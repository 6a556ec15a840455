// tests/smart_tag_test.rs
use cavy::analyzer::VersionMatches;
use cavy::domain::TagPrefixes;
use cavy::{
    analyze_package_version, smart_tag, smart_tag_pre_release, smart_tag_release,
    AnalyzedPackageVersion, CavyError, SmartTagger, StaticRegistry,
};
use semver::Version;

fn v(s: &str) -> Version {
    Version::parse(s).unwrap()
}

fn versions(list: &[&str]) -> Vec<Version> {
    list.iter().map(|s| v(s)).collect()
}

fn registry() -> StaticRegistry {
    let mut registry = StaticRegistry::new();
    registry.add_package("semver", ["0.1.0", "1.0.0", "1.0.1", "1.1.0", "2.0.0-rc.1", "2.0.0"]);
    registry.add_package("fresh", Vec::<String>::new());
    registry
}

#[test]
fn test_initial_release() {
    let apv = AnalyzedPackageVersion {
        version: v("0.0.0"),
        major: 0,
        minor: 0,
        patch: 0,
        is_major_highest: true,
        is_minor_highest: true,
        is_patch_highest: true,
        matches: VersionMatches::default(),
    };

    assert_eq!(
        smart_tag_release(&apv, &TagPrefixes::new(0, 0, 0)),
        vec!["latest", "v0~latest", "v0.0~latest"]
    );
}

#[test]
fn test_release_lower_patch_on_highest_line() {
    let apv = AnalyzedPackageVersion {
        version: v("0.1.0"),
        major: 0,
        minor: 1,
        patch: 0,
        is_major_highest: true,
        is_minor_highest: true,
        is_patch_highest: false,
        matches: VersionMatches {
            major: versions(&["0.0.0", "0.1.1"]),
            minor: versions(&["0.1.1"]),
            patch: vec![],
        },
    };

    assert_eq!(
        smart_tag_release(&apv, &TagPrefixes::new(0, 1, 0)),
        vec!["v0.1.0~latest"]
    );
}

#[test]
fn test_initial_pre_release() {
    let apv = AnalyzedPackageVersion {
        version: v("0.0.0-alpha"),
        major: 0,
        minor: 0,
        patch: 0,
        is_major_highest: true,
        is_minor_highest: true,
        is_patch_highest: true,
        matches: VersionMatches::default(),
    };

    assert_eq!(
        smart_tag_pre_release(&apv, &TagPrefixes::new(0, 0, 0), "next"),
        vec!["v0~next", "v0.0~next", "v0.0.0~next"]
    );
}

#[test]
fn test_analyze_against_higher_lines() {
    let apv = analyze_package_version(&v("0.0.0"), &versions(&["0.1.0", "1.2.3", "4.5.6"]));

    assert!(!apv.is_major_highest);
    assert!(!apv.is_minor_highest);
    assert!(apv.is_patch_highest);
    assert_eq!(apv.matches.major.len(), 1);
    assert_eq!(apv.matches.minor.len(), 0);
}

#[test]
fn test_development_build_gets_single_tag() {
    let tags = smart_tag(
        &registry(),
        "test",
        "0.0.0--dev-build.1234567890",
        "next",
        "dev-build",
    )
    .unwrap();
    assert_eq!(tags, vec!["next"]);
}

#[test]
fn test_already_published_version() {
    let err = smart_tag(&registry(), "semver", "1.0.0", "next", "beta").unwrap_err();
    assert!(matches!(err, CavyError::DuplicateVersion { .. }));
    assert!(err.to_string().contains("already published"));
}

#[test]
fn test_invalid_version() {
    let err = smart_tag(&registry(), "test", "failit", "next", "dev-build").unwrap_err();
    assert!(matches!(err, CavyError::InvalidVersion { .. }));
}

#[test]
fn test_unknown_package() {
    let err = smart_tag(&registry(), "failit-", "1.0.0", "next", "dev-build").unwrap_err();
    assert!(matches!(err, CavyError::RegistryFetch { .. }));
}

#[test]
fn test_release_history() {
    let tagger = SmartTagger::new("next", "dev-build");
    let r = registry();

    // highest everywhere
    assert_eq!(
        tagger.smart_tag(&r, "semver", "2.1.0").unwrap(),
        vec!["latest", "v2~latest", "v2.1~latest"]
    );
    // newest patch of the newest minor of an old major
    assert_eq!(
        tagger.smart_tag(&r, "semver", "1.1.1").unwrap(),
        vec!["v1~latest", "v1.1~latest"]
    );
    // newest patch of an old minor
    assert_eq!(tagger.smart_tag(&r, "semver", "1.0.2").unwrap(), vec!["v1.0~latest"]);
    // new major line below the highest one
    assert_eq!(
        tagger.smart_tag(&r, "semver", "0.5.0").unwrap(),
        vec!["v0~latest", "v0.5~latest"]
    );
    // first publish of a package
    assert_eq!(
        tagger.smart_tag(&r, "fresh", "0.1.0").unwrap(),
        vec!["latest", "v0~latest", "v0.1~latest"]
    );
}

#[test]
fn test_pre_release_history() {
    let tagger = SmartTagger::new("next", "dev-build");
    let r = registry();

    assert_eq!(
        tagger.smart_tag(&r, "semver", "3.0.0-alpha.1").unwrap(),
        vec!["v3~next", "v3.0~next", "v3.0.0~next"]
    );
    assert_eq!(
        tagger.smart_tag(&r, "semver", "2.0.0-rc.2").unwrap(),
        vec!["v2~next", "v2.0~next", "v2.0.0~next"]
    );
    assert_eq!(
        tagger.smart_tag(&r, "semver", "2.0.0-beta.1").unwrap(),
        vec!["v2.0.0~next"]
    );
    // only pre-releases are compared, so the 1.x releases do not count
    assert_eq!(
        tagger.smart_tag(&r, "semver", "1.2.0-rc.1").unwrap(),
        vec!["v1~next", "v1.2~next", "v1.2.0~next"]
    );
}

#[test]
fn test_pre_release_below_newer_minor_line() {
    let registry = StaticRegistry::with_package("pkg", ["1.2.0-rc.1", "1.1.0-beta"]);
    let tags = smart_tag(&registry, "pkg", "1.1.0-alpha", "next", "dev-build").unwrap();
    assert_eq!(tags, vec!["v1.1~next", "v1.1.0~next"]);
}

#[test]
fn test_decision_keeps_normalized_version() {
    let decision = SmartTagger::new("next", "dev-build")
        .decide(&registry(), "semver", "v3.0.0+sha.1234")
        .unwrap();
    assert_eq!(decision.version, v("3.0.0"));
    assert!(!decision.is_pre_release);
    assert!(decision.warnings.is_empty());
}
