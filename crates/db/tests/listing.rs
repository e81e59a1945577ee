//! Store-level tests for the shared listing helpers: window arithmetic,
//! predicate rendering, and count/fetch consistency.

use portal_core::listing::ListQuery;
use portal_db::models::news::CreateNews;
use portal_db::repositories::NewsRepo;
use sqlx::PgPool;

fn create_input(title: &str) -> CreateNews {
    CreateNews {
        title: title.to_string(),
        description: None,
        img: Vec::new(),
        date: None,
    }
}

async fn seed_titles(pool: &PgPool, titles: &[&str]) {
    for title in titles {
        NewsRepo::create(pool, &create_input(title)).await.unwrap();
    }
}

fn resolve(raw_range: Option<&str>, raw_sort: Option<&str>, raw_filter: Option<&str>) -> ListQuery {
    ListQuery::resolve(&NewsRepo::POLICY, raw_range, raw_sort, raw_filter).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn window_never_exceeds_total(pool: PgPool) {
    seed_titles(&pool, &["a", "b", "c"]).await;

    let query = resolve(Some("[0,9]"), None, None);
    let (total, rows) = NewsRepo::list(&pool, &query).await.unwrap();

    assert_eq!(total, 3);
    assert!(rows.len() as i64 <= query.take().min(total));
    assert_eq!(rows.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn window_slices_with_skip_and_take(pool: PgPool) {
    seed_titles(&pool, &["a", "b", "c", "d", "e"]).await;

    let query = resolve(Some("[1,3]"), Some(r#"["title","ASC"]"#), None);
    let (total, rows) = NewsRepo::list(&pool, &query).await.unwrap();

    assert_eq!(total, 5);
    let titles: Vec<&str> = rows.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["b", "c", "d"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn contains_filter_is_case_insensitive(pool: PgPool) {
    seed_titles(&pool, &["Foobar", "FOO news", "bar only"]).await;

    let query = resolve(None, None, Some(r#"{"title":"foo"}"#));
    let (total, rows) = NewsRepo::list(&pool, &query).await.unwrap();

    assert_eq!(total, 2);
    assert!(rows.iter().all(|n| n.title.to_lowercase().contains("foo")));
}

#[sqlx::test(migrations = "./migrations")]
async fn contains_filter_treats_wildcards_literally(pool: PgPool) {
    seed_titles(&pool, &["50% discount", "50 dollars"]).await;

    let query = resolve(None, None, Some(r#"{"title":"50%"}"#));
    let (total, rows) = NewsRepo::list(&pool, &query).await.unwrap();

    assert_eq!(total, 1);
    assert_eq!(rows[0].title, "50% discount");
}

#[sqlx::test(migrations = "./migrations")]
async fn membership_filter_matches_exact_set(pool: PgPool) {
    seed_titles(&pool, &["alpha", "beta", "gamma"]).await;

    let query = resolve(None, None, Some(r#"{"title":["alpha","beta"]}"#));
    let (total, rows) = NewsRepo::list(&pool, &query).await.unwrap();

    assert_eq!(total, 2);
    // Exact membership: no substring expansion of set elements.
    assert!(rows.iter().all(|n| n.title == "alpha" || n.title == "beta"));
}

#[sqlx::test(migrations = "./migrations")]
async fn id_membership_filter_selects_rows(pool: PgPool) {
    seed_titles(&pool, &["one", "two", "three"]).await;
    let all = resolve(None, Some(r#"["id","ASC"]"#), None);
    let (_, rows) = NewsRepo::list(&pool, &all).await.unwrap();
    let wanted = format!(r#"{{"id":[{},{}]}}"#, rows[0].id, rows[2].id);

    let query = resolve(None, None, Some(&wanted));
    let (total, selected) = NewsRepo::list(&pool, &query).await.unwrap();

    assert_eq!(total, 2);
    let ids: Vec<i64> = selected.iter().map(|n| n.id).collect();
    assert!(ids.contains(&rows[0].id));
    assert!(ids.contains(&rows[2].id));
}

#[sqlx::test(migrations = "./migrations")]
async fn count_and_fetch_share_the_predicate(pool: PgPool) {
    seed_titles(&pool, &["match a", "match b", "match c", "other"]).await;

    let query = resolve(Some("[0,1]"), None, Some(r#"{"title":"match"}"#));
    let (total, rows) = NewsRepo::list(&pool, &query).await.unwrap();

    // Total counts every match while the window only returns two rows.
    assert_eq!(total, 3);
    assert_eq!(rows.len(), 2);
}
