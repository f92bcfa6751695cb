use cookiejar::base::config::JarConfig;
use cookiejar::base::jarerror::SetCookieError;
use cookiejar::cookies::canonical_cookie::JarLine;
use cookiejar::cookies::jar::{CookieJar, Upsert};
use cookiejar::cookies::matcher::{CookiePattern, MatchMode};
use cookiejar::cookies::netscape::{parse_jar, write_jar};
use cookiejar::cookies::setcookie::{
    is_rfc2616_token, is_rfc6265_cookie_octets, parse_set_cookie, parse_set_cookie_at,
};
use time::OffsetDateTime;

const JAR: &str = "# Netscape HTTP Cookie File\n\
# https://curl.se/docs/http-cookies.html\n\
\n\
example.com\tFALSE\t/\tFALSE\t0\tid\tabc123\n\
#HttpOnly_.example.com\tTRUE\t/\tTRUE\t1700000000\tsid\txyz\n\
example.com\tFALSE\t/account\tTRUE\t1800000000\tpref\tcompact\n\
.other.org\tTRUE\t/\tFALSE\t-1\tid\tq\n";

#[test]
fn test_scenario_a_max_age() {
    let before = OffsetDateTime::now_utc().unix_timestamp();
    let parsed =
        parse_set_cookie("Set-Cookie: id=abc123; Domain=example.com; Path=/; Max-Age=3600")
            .unwrap();
    let after = OffsetDateTime::now_utc().unix_timestamp();

    let cookie = parsed.cookie;
    assert_eq!(cookie.name, "id");
    assert_eq!(cookie.value, "abc123");
    assert_eq!(cookie.domain, "example.com");
    assert_eq!(cookie.path, "/");
    assert!(cookie.expires >= before + 3600 && cookie.expires <= after + 3600);
}

#[test]
fn test_scenario_b_prefer_max_age() {
    let result = parse_set_cookie(
        "Set-Cookie: id=abc123; Domain=example.com; Path=/; Expires=Wed, 09 Jun 2021 10:18:14 GMT",
    );
    assert_eq!(result, Err(SetCookieError::PreferMaxAge));
}

#[test]
fn test_scenario_c_missing_path() {
    let result = parse_set_cookie("Set-Cookie: id=abc123; Domain=example.com; Max-Age=60");
    assert_eq!(result, Err(SetCookieError::MissingPath));
}

#[test]
fn test_scenario_d_host_only_line() {
    let records = parse_jar(
        b"example.com\tFALSE\t/\tFALSE\t0\tid\tabc123",
        &JarConfig::default(),
    )
    .unwrap();
    let cookie = records[0].active_cookie().unwrap();
    assert!(cookie.host_only());
    assert_eq!(cookie.expires, 0);
    assert!(!cookie.http_only);
}

#[test]
fn test_scenario_e_httponly_line() {
    let records = parse_jar(
        b"#HttpOnly_example.com\tTRUE\t/\tTRUE\t1700000000\tsid\txyz\n",
        &JarConfig::default(),
    )
    .unwrap();
    assert_eq!(records.len(), 1);
    let cookie = records[0].active_cookie().unwrap();
    assert!(cookie.http_only);
    assert!(!cookie.host_only());
    assert!(cookie.secure);
    assert_eq!(cookie.domain, "example.com");
    assert_eq!(cookie.name, "sid");
    assert_eq!(cookie.value, "xyz");
}

#[test]
fn test_scenario_f_evict_by_domain() {
    let mut jar = CookieJar::parse(JAR.as_bytes(), JarConfig::default()).unwrap();
    let evicted = jar.evict_all(&CookiePattern::new("*", "example.com", "*"));

    assert_eq!(evicted, 2);
    let left: Vec<_> = jar.cookies().map(|c| (c.name, c.domain)).collect();
    assert_eq!(left, vec![("sid", ".example.com"), ("id", ".other.org")]);
}

#[test]
fn test_roundtrip_preserves_records() {
    let records = parse_jar(JAR.as_bytes(), &JarConfig::default()).unwrap();
    let text = write_jar(&records);
    assert_eq!(text, JAR.as_bytes());

    let reparsed = parse_jar(&text, &JarConfig::default()).unwrap();
    assert_eq!(reparsed, records);
}

#[test]
fn test_roundtrip_drops_evicted_once() {
    let mut jar = CookieJar::parse(JAR.as_bytes(), JarConfig::default()).unwrap();
    jar.evict_all(&CookiePattern::new("id", "*", "*"));

    let first = jar.to_netscape();
    let again = CookieJar::parse(&first, JarConfig::default()).unwrap();
    assert_eq!(again.records().len(), jar.records().len() - 2);
    assert_eq!(again.to_netscape(), first);
}

#[test]
fn test_comments_survive_verbatim() {
    let jar = CookieJar::parse(JAR.as_bytes(), JarConfig::default()).unwrap();
    let comments: Vec<_> = jar
        .records()
        .iter()
        .filter_map(|r| match r.line {
            JarLine::Comment(text) => Some(text),
            JarLine::Cookie(_) => None,
        })
        .collect();
    assert_eq!(
        comments,
        vec![
            &b"# Netscape HTTP Cookie File"[..],
            &b"# https://curl.se/docs/http-cookies.html"[..],
            &b""[..]
        ]
    );
}

#[test]
fn test_accepted_headers_satisfy_charsets() {
    let headers = [
        "Set-Cookie: a=b; Domain=d; Path=/; Max-Age=1",
        "Set-Cookie: __Host-x=\"q!#$\"; Domain=d; Path=/; Max-Age=1",
        "Set-Cookie: tok.en_1=v%20=x; Domain=d; Path=/; Max-Age=1",
    ];
    for header in headers {
        let cookie = parse_set_cookie_at(header, 0).unwrap().cookie;
        assert!(is_rfc2616_token(cookie.name), "{header}");
        assert!(is_rfc6265_cookie_octets(cookie.value), "{header}");
    }
}

#[test]
fn test_wildcard_all_matches_first_cookie() {
    let jar = CookieJar::parse(JAR.as_bytes(), JarConfig::default()).unwrap();
    let idx = jar
        .find(0, MatchMode::Wildcard, &CookiePattern::new("*", "*", "*"))
        .unwrap();
    assert_eq!(idx, 3);

    let own = CookiePattern::key_of(jar.records()[idx].active_cookie().unwrap());
    assert_eq!(jar.find(0, MatchMode::Exact, &own), Some(idx));
}

#[test]
fn test_set_cookie_into_jar() {
    let header = "Set-Cookie: id=\"fresh\"; Domain=example.com; Path=/; Max-Age=0; HttpOnly";
    let parsed = parse_set_cookie(header).unwrap();

    let mut jar = CookieJar::parse(JAR.as_bytes(), JarConfig::default()).unwrap();
    assert_eq!(jar.upsert(parsed.cookie.clone()).unwrap(), Upsert::Replaced(3));
    assert_eq!(jar.upsert(parsed.cookie).unwrap(), Upsert::Replaced(3));

    let text = String::from_utf8(jar.to_netscape()).unwrap();
    assert!(text.contains("#HttpOnly_example.com\tFALSE\t/\tFALSE\t0\tid\tfresh\n"));
    assert!(!text.contains("abc123"));
    assert_eq!(jar.cookie_count(), 4);
}

#[test]
fn test_json_export() {
    let jar = CookieJar::parse(JAR.as_bytes(), JarConfig::default()).unwrap();
    let json = jar.to_json().unwrap();
    assert!(json.starts_with(r#"[{"name":"id","value":"abc123","expires":0,"#));
    assert!(json.ends_with("},null]"));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[1]["httponly"], true);
    assert_eq!(items[1]["secure"], true);
    assert_eq!(items[3]["expires"], -1);
}
