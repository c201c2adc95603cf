//! Demonstration data, written once per persisted state.

use ah_core::{Comment, PersistentStore, PullRequest, PullRequestStatus, PullRequestUpdate, Resource, Review, User, UserProfile};
use chrono::{DateTime, Duration, Utc};

fn demo_user(id: &str, email: &str, name: &str, role: &str, university: &str) -> User {
    User {
        id: id.into(),
        email: email.into(),
        display_name: name.into(),
        password: "password123".into(),
        role: role.into(),
        profile: UserProfile {
            university: Some(university.into()),
            ..Default::default()
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_resource(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    department: &str,
    course_code: &str,
    subject: &str,
    kind: &str,
    created_at: DateTime<Utc>,
    uploader_id: &str,
) -> Resource {
    Resource {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        department: department.into(),
        course_code: course_code.into(),
        subject: subject.into(),
        kind: kind.into(),
        created_at,
        downloads: 0,
        uploader_id: uploader_id.into(),
    }
}

fn demo_review(user_id: &str, resource_id: &str, rating: f64, text: &str, at: DateTime<Utc>) -> Review {
    Review {
        resource_id: resource_id.into(),
        user_id: user_id.into(),
        rating,
        text: text.into(),
        created_at: at,
        updated_at: None,
    }
}

/// Populates the store unless it has been seeded before.
pub fn seed_demo_data(store: &PersistentStore) {
    if store.is_seeded() {
        tracing::debug!("demo data already present");
        return;
    }
    let now = Utc::now();

    for user in [
        demo_user("demo-u1", "alice@demo.edu", "Alice Chen", "student", "State University"),
        demo_user("demo-u2", "bob@demo.edu", "Bob Okafor", "student", "State University"),
        demo_user("demo-u3", "prof.diaz@demo.edu", "Dr. Elena Diaz", "educator", "Tech Institute"),
    ] {
        store.add_user(user);
    }

    // Oldest first; add_resource prepends.
    let resources = [
        demo_resource(
            "demo-r1",
            "Data Structures Cheat Sheet",
            "Big-O tables and diagrams for lists, trees, heaps and hash maps.",
            &["algorithms", "exam", "cheat-sheet"],
            "CS",
            "CS201",
            "Data Structures",
            "pdf",
            now - Duration::days(40),
            "demo-u3",
        ),
        demo_resource(
            "demo-r2",
            "Calculus II Lecture Recordings",
            "Integration techniques and series, weeks 1-6.",
            &["integration", "series"],
            "Math",
            "MATH152",
            "Calculus",
            "video",
            now - Duration::days(30),
            "demo-u3",
        ),
        demo_resource(
            "demo-r3",
            "Operating Systems Notes",
            "Scheduling, virtual memory and file systems summarised.",
            &["os", "memory"],
            "CS",
            "CS350",
            "Operating Systems",
            "notes",
            now - Duration::days(14),
            "demo-u1",
        ),
        demo_resource(
            "demo-r4",
            "Linear Algebra Problem Set Solutions",
            "Worked solutions for eigenvalue and diagonalisation problems.",
            &["matrices", "eigenvalues"],
            "Math",
            "MATH221",
            "Linear Algebra",
            "pdf",
            now - Duration::days(7),
            "demo-u2",
        ),
        demo_resource(
            "demo-r5",
            "Intro to Machine Learning Slides",
            "Regression, classification and model evaluation basics.",
            &["ml", "regression"],
            "CS",
            "CS480",
            "Machine Learning",
            "slides",
            now - Duration::days(2),
            "demo-u3",
        ),
    ];
    for resource in resources {
        store.add_resource(resource);
    }

    for review in [
        demo_review("demo-u1", "demo-r1", 5.0, "Saved me before the final.", now - Duration::days(20)),
        demo_review("demo-u2", "demo-r1", 4.0, "Clear diagrams.", now - Duration::days(18)),
        demo_review("demo-u1", "demo-r2", 3.0, "Audio is quiet in week 4.", now - Duration::days(10)),
        demo_review("demo-u2", "demo-r3", 5.0, "Best OS summary around.", now - Duration::days(5)),
        demo_review("demo-u3", "demo-r4", 4.0, "Correct and well explained.", now - Duration::days(3)),
    ] {
        store.add_review(review);
    }

    store.add_comment(Comment {
        resource_id: "demo-r1".into(),
        user_id: "demo-u2".into(),
        text: "Could you add a section on tries?".into(),
        created_at: now - Duration::days(17),
    });
    store.add_comment(Comment {
        resource_id: "demo-r1".into(),
        user_id: "demo-u3".into(),
        text: "Good idea, open a pull request.".into(),
        created_at: now - Duration::days(16),
    });

    let tries = PullRequest::propose(
        "demo-r1",
        "demo-u2",
        "Add tries section",
        "New page covering trie insertion and lookup complexity.",
        now - Duration::days(15),
    );
    let tries_id = tries.id.clone();
    store.add_pull_request(tries);
    store.update_pull_request(&tries_id, PullRequestUpdate::status(PullRequestStatus::Accepted));
    store.add_pull_request(PullRequest::propose(
        "demo-r2",
        "demo-u1",
        "Fix week 4 audio",
        "Re-encoded week 4 recording with normalised volume.",
        now - Duration::days(9),
    ));

    store.set_progress("demo-u1", "demo-r1", "done");
    store.set_progress("demo-u1", "demo-r3", "in-progress");
    store.set_progress("demo-u2", "demo-r4", "in-progress");

    for (user_id, resource_id) in [
        ("demo-u1", "demo-r1"),
        ("demo-u2", "demo-r1"),
        ("demo-u3", "demo-r1"),
        ("demo-u1", "demo-r3"),
        ("demo-u2", "demo-r3"),
        ("demo-u2", "demo-r4"),
    ] {
        store.add_download(user_id, resource_id);
    }

    store.mark_seeded();
    tracing::info!("seeded demo data");
}
