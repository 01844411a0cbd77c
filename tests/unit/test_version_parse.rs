use kube_access::models::{Version, VersionError};

// ============================================================================
// Version::parse 测试
// ============================================================================

#[test]
fn test_parse_标准版本串() {
    assert_eq!(Version::parse("v1.8.0").unwrap(), Version::new(1, 8, 0));
}

#[test]
fn test_parse_patch带厂商后缀() {
    // 托管集群 (如GKE) 会在patch后附加构建元数据
    assert_eq!(
        Version::parse("v1.9.2-gke.0").unwrap(),
        Version::new(1, 9, 2)
    );
}

#[test]
fn test_parse_缺少patch默认为0() {
    // 无前缀v也同样被容忍
    assert_eq!(Version::parse("1.10").unwrap(), Version::new(1, 10, 0));
}

#[test]
fn test_parse_minor带构建元数据() {
    assert_eq!(
        Version::parse("v2.0+build123").unwrap(),
        Version::new(2, 0, 0)
    );
}

#[test]
fn test_parse_minor后缀不带数字时取前导数字() {
    let test_cases = [
        ("v1.9+.0", Version::new(1, 9, 0)),
        ("v1.9-gke.3", Version::new(1, 9, 3)),
        ("v1.10+coreos.0", Version::new(1, 10, 0)),
    ];

    for (input, expected) in test_cases {
        assert_eq!(Version::parse(input).unwrap(), expected, "输入: {}", input);
    }
}

#[test]
fn test_parse_minor无前导数字按0处理() {
    // minor段存在但无法解析,与缺失同样按0处理 (仅限minor/patch)
    assert_eq!(Version::parse("v1.abc.5").unwrap(), Version::new(1, 0, 5));
}

#[test]
fn test_parse_主版本号无效是致命错误() {
    let err = Version::parse("vX.1.0").unwrap_err();
    match err {
        VersionError::InvalidMajor(segment) => assert_eq!(segment, "X"),
        other => panic!("预期 InvalidMajor, 实际: {:?}", other),
    }

    // 主版本号带后缀同样是致命错误,绝不宽松处理
    assert!(matches!(
        Version::parse("1a.2.3"),
        Err(VersionError::InvalidMajor(_))
    ));
}

#[test]
fn test_parse_空输入() {
    assert!(matches!(Version::parse(""), Err(VersionError::Empty)));
    assert!(matches!(Version::parse("   "), Err(VersionError::Empty)));
    assert!(matches!(Version::parse("v"), Err(VersionError::Empty)));
}

#[test]
fn test_parse_只有主版本号() {
    // minor与patch都缺失时均默认为0
    assert_eq!(Version::parse("v1").unwrap(), Version::new(1, 0, 0));
}

#[test]
fn test_parse_幂等性() {
    // 纯函数,无隐藏状态: 同一输入两次解析结果一致
    let first = Version::parse("v1.9.2-gke.0").unwrap();
    let second = Version::parse("v1.9.2-gke.0").unwrap();
    assert_eq!(first, second);
}
