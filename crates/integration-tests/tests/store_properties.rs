use ah_core::{
    accounts, Download, ProgressEntry, PullRequest, PullRequestStatus, PullRequestUpdate, Resource, ResourceUpdate,
    Review, SearchCriteria, SortBy, User, UserUpdate,
};
use chrono::Duration;
use integration_tests::{epoch, memory_store, resource, review, user, ManualClock};

#[test]
fn resource_round_trip() {
    let (store, _) = memory_store();
    let mut notes = resource("r1", "CS", "pdf");
    notes.tags = vec!["graphs".into(), "bfs".into()];
    notes.downloads = 3;

    store.add_resource(notes.clone());

    assert_eq!(store.get_resource_by_id("r1"), Some(notes));
}

#[test]
fn duplicate_email_lookup_returns_first_added() {
    let (store, _) = memory_store();
    store.add_user(user("first", "same@uni.edu"));
    store.add_user(user("second", "same@uni.edu"));

    assert_eq!(store.find_user("same@uni.edu").map(|u| u.id).as_deref(), Some("first"));
}

#[test]
fn review_resubmission_keeps_one_record() {
    let clock = ManualClock::starting_at(epoch());
    let (store, _) = memory_store();
    let store = store.with_clock(clock.clone());

    store.add_review(review("u1", "r1", 2.0));
    clock.advance(Duration::hours(3));
    store.add_review(review("u1", "r1", 4.5));

    let for_pair: Vec<Review> = store
        .get_all::<Review>()
        .into_iter()
        .filter(|r| r.user_id == "u1" && r.resource_id == "r1")
        .collect();
    assert_eq!(for_pair.len(), 1);
    assert_eq!(for_pair[0].rating, 4.5);
    assert_eq!(for_pair[0].updated_at, Some(epoch() + Duration::hours(3)));
    assert!(for_pair[0].updated_at > Some(for_pair[0].created_at));
}

#[test]
fn repeated_downloads_increment_once() {
    let (store, _) = memory_store();
    let mut r = resource("r1", "CS", "pdf");
    r.downloads = 7;
    store.add_resource(r);

    for _ in 0..5 {
        store.add_download("u1", "r1");
    }

    assert_eq!(store.get_all::<Download>().len(), 1);
    assert_eq!(store.get_resource_by_id("r1").map(|r| r.downloads), Some(8));
}

#[test]
fn progress_upsert() {
    let (store, _) = memory_store();
    store.set_progress("u", "r", "done");
    store.set_progress("u", "r", "in-progress");

    let entries = store.get_all::<ProgressEntry>();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, "in-progress");
}

#[test]
fn search_filter_conjunction() {
    let (store, _) = memory_store();
    // Prepend order: add in reverse so storage order is first, second, third.
    store.add_resource(resource("math-pdf", "Math", "pdf"));
    store.add_resource(resource("cs-video", "CS", "video"));
    store.add_resource(resource("cs-pdf", "CS", "pdf"));

    let hits = store.search_resources(&SearchCriteria::default().department("CS").kind("pdf"));

    let ids: Vec<&str> = hits.iter().map(|h| h.resource.id.as_str()).collect();
    assert_eq!(ids, ["cs-pdf"]);
}

#[test]
fn search_sorts_by_downloads() {
    let (store, _) = memory_store();
    for (id, downloads) in [("a", 5), ("b", 20), ("c", 1)] {
        let mut r = resource(id, "CS", "pdf");
        r.downloads = downloads;
        store.add_resource(r);
    }

    let hits = store.search_resources(&SearchCriteria::default().sort_by(SortBy::Downloads));

    let counts: Vec<u64> = hits.iter().map(|h| h.resource.downloads).collect();
    assert_eq!(counts, [20, 5, 1]);
}

#[test]
fn search_annotates_average_rating() {
    let (store, _) = memory_store();
    store.add_resource(resource("x", "CS", "pdf"));
    store.add_resource(resource("quiet", "CS", "pdf"));
    store.add_review(review("u1", "x", 4.0));
    store.add_review(review("u2", "x", 5.0));
    store.add_review(review("u3", "x", 3.0));

    let hits = store.search_resources(&SearchCriteria::default());

    let x = hits.iter().find(|h| h.resource.id == "x").expect("x listed");
    assert_eq!((x.avg_rating, x.review_count), (4.0, 3));
    let quiet = hits.iter().find(|h| h.resource.id == "quiet").expect("quiet listed");
    assert_eq!((quiet.avg_rating, quiet.review_count), (0.0, 0));
}

#[test]
fn updates_on_missing_ids_are_noops() {
    let (store, medium) = memory_store();
    store.add_user(user("u1", "a@uni.edu"));
    store.add_resource(resource("r1", "CS", "pdf"));
    store.add_pull_request(PullRequest::propose("r1", "u1", "t", "c", epoch()));
    let users = store.get_all::<User>();
    let resources = store.get_all::<Resource>();
    let prs = store.get_all::<PullRequest>();
    let keys_before = medium.len();

    store.update_user("ghost", UserUpdate { display_name: Some("x".into()), ..Default::default() });
    store.update_resource("ghost", ResourceUpdate { title: Some("x".into()), ..Default::default() });
    store.update_pull_request("ghost", PullRequestUpdate::status(PullRequestStatus::Rejected));

    assert_eq!(store.get_all::<User>(), users);
    assert_eq!(store.get_all::<Resource>(), resources);
    assert_eq!(store.get_all::<PullRequest>(), prs);
    assert_eq!(medium.len(), keys_before);
}

#[test]
fn state_is_reread_on_every_call() {
    let (store, medium) = memory_store();
    let other = ah_core::PersistentStore::new(medium.clone());

    other.add_resource(resource("r1", "CS", "pdf"));
    assert!(store.get_resource_by_id("r1").is_some());

    store.mark_seeded();
    assert!(other.is_seeded());
}

#[test]
fn sign_up_then_log_in_round_trip() {
    let (store, _) = memory_store();
    let account = accounts::NewAccount {
        email: "lin@uni.edu".into(),
        display_name: "Lin".into(),
        password: "correct-horse".into(),
        role: Some("educator".into()),
        profile: Default::default(),
    };
    let created = accounts::sign_up(&store, account.clone()).expect("sign up");
    store.logout();
    assert!(store.current_user().is_none());

    assert!(accounts::sign_up(&store, account).is_err());
    let logged_in = accounts::log_in(&store, "lin@uni.edu", "correct-horse").expect("log in");
    assert_eq!(logged_in, created);
    assert_eq!(store.current_user().map(|u| u.role).as_deref(), Some("educator"));
}
