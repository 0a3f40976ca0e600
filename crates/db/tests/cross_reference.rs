//! Integration tests for rosters, space links and derived chat teams.

use std::sync::Arc;

use teamspace_core::changes::NoopSink;
use teamspace_core::clock::ManualClock;
use teamspace_db::models::chat::TeamKind;
use teamspace_db::models::doc::CreateDoc;
use teamspace_db::models::space::{CreateSpace, UpdateSpace};
use teamspace_db::models::squad::{CreateSquad, Member, UpdateSquad};
use teamspace_db::models::user::{Profile, UserProfile};
use teamspace_db::resolver::unique_members;
use teamspace_db::{MemoryKv, Workspace};

fn workspace() -> Workspace {
    Workspace::with_parts(
        Arc::new(MemoryKv::new()),
        Arc::new(ManualClock::new(1_700_000_000_000)),
        Arc::new(NoopSink),
    )
}

fn member(name: &str, role: &str) -> Member {
    Member {
        name: name.into(),
        avatar: format!("https://picsum.photos/seed/{}/32/32", name.to_lowercase()),
        role: role.into(),
        user_id: None,
    }
}

fn names(members: &[Member]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Test: squad → space roster projection
// ---------------------------------------------------------------------------

/// A space created for a squad copies the squad's roster one to one.
#[test]
fn new_space_projects_squad_members() {
    let ws = workspace();
    let squad = ws.squads.add(&CreateSquad {
        name: "Alpha".into(),
        description: String::new(),
        members: vec![member("Alex", "Lead"), member("Sam", "Backend")],
    });

    let space = ws.add_space(&CreateSpace {
        name: "Launch Plan".into(),
        description: "Q4 launch".into(),
        squad_id: Some(squad.id.clone()),
    });

    assert_eq!(space.id, "launch-plan-1700000000000");
    assert_eq!(space.progress, 0);
    assert_eq!(names(&space.members), ["Alex", "Sam"]);
    assert_eq!(space.members, squad.members);
}

/// An unknown squad id yields an empty roster.
#[test]
fn space_for_unknown_squad_has_no_members() {
    let ws = workspace();
    let space = ws.add_space(&CreateSpace {
        name: "Orphan".into(),
        description: String::new(),
        squad_id: Some("no-such-squad".into()),
    });
    assert!(space.members.is_empty());
    assert_eq!(space.squad_id.as_deref(), Some("no-such-squad"));
}

/// Changing the squad of a space re-projects the roster; unassigning clears it.
#[test]
fn reassigning_squad_recomputes_roster() {
    let ws = workspace();

    let moved = ws
        .update_space(
            "api-integration",
            &UpdateSpace {
                squad_id: Some(Some("bravo-squad".into())),
                ..Default::default()
            },
        )
        .expect("seed space");
    assert_eq!(
        names(&moved.members),
        ["Olivia", "Jackson", "Isabella", "William"]
    );
    assert_eq!(moved.members[0].role, "Team Lead");

    let cleared = ws
        .update_space(
            "api-integration",
            &UpdateSpace {
                squad_id: Some(None),
                ..Default::default()
            },
        )
        .expect("seed space");
    assert!(cleared.members.is_empty());
    assert_eq!(cleared.squad_id, None);
}

/// Editing a squad is visible through the live roster without touching the
/// stored snapshot.
#[test]
fn live_roster_follows_squad_edits() {
    let ws = workspace();
    let mut roster = ws.squads.get_by_id("alpha-squad").unwrap().members;
    roster.push(member("Riley", "Intern"));
    ws.squads.update(
        "alpha-squad",
        &UpdateSquad {
            members: Some(roster),
            ..Default::default()
        },
    );

    let stored = ws.spaces.get_by_id("website-redesign").unwrap();
    assert_eq!(stored.members.len(), 5);

    let live = ws.space_with_live_members("website-redesign").unwrap();
    assert_eq!(live.members.len(), 6);
    assert_eq!(live.members[5].name, "Riley");

    ws.squads.delete("alpha-squad");
    let fallback = ws.space_with_live_members("website-redesign").unwrap();
    assert_eq!(fallback.members, stored.members);
}

// ---------------------------------------------------------------------------
// Test: docs and video notes attached to spaces
// ---------------------------------------------------------------------------

/// Only docs linked to the space are listed; unlinked docs are skipped.
#[test]
fn docs_for_space_skips_unlinked_docs() {
    let ws = workspace();
    let titles: Vec<_> = ws
        .docs_for_space("website-redesign")
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, ["Project Phoenix Onboarding"]);

    let style_guide = ws.docs.get_by_id("doc-2").unwrap();
    assert_eq!(style_guide.title, "API Style Guide");
    assert_eq!(style_guide.space_id, None);
    assert!(ws.docs_for_space("api-integration").is_empty());

    let notes: Vec<_> = ws
        .video_notes_for_space("api-integration")
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(notes, ["vn-2"]);
}

/// Deleting a space leaves its docs behind, reported as orphans.
#[test]
fn deleting_a_space_orphans_its_content() {
    let ws = workspace();
    assert!(ws.orphaned_docs().is_empty());

    ws.docs.add(&CreateDoc {
        title: "Retro".into(),
        description: String::new(),
        content: String::new(),
        space_id: Some("website-redesign".into()),
    });
    ws.spaces.delete("website-redesign");

    let orphans: Vec<_> = ws.orphaned_docs().into_iter().map(|d| d.title).collect();
    assert_eq!(orphans, ["Retro", "Project Phoenix Onboarding"]);
    let notes: Vec<_> = ws.orphaned_video_notes().into_iter().map(|v| v.id).collect();
    assert_eq!(notes, ["vn-1"]);
}

// ---------------------------------------------------------------------------
// Test: rosters
// ---------------------------------------------------------------------------

/// A name on several rosters appears once, with the last roster's fields.
#[test]
fn duplicate_names_merge_with_later_fields_winning() {
    let spaces = vec![member("Alex", "Lead")];
    let squads = vec![member("Alex", "Architect"), member("Sam", "Backend")];

    let merged = unique_members([spaces.as_slice(), squads.as_slice()]);

    assert_eq!(names(&merged), ["Alex", "Sam"]);
    assert_eq!(merged[0].role, "Architect");
}

/// The workspace roster lists every seeded person once, with squad roles.
#[test]
fn team_roster_deduplicates_across_spaces_and_squads() {
    let ws = workspace();
    let roster = ws.team_roster();

    let alex: Vec<_> = roster.iter().filter(|m| m.name == "Alex").collect();
    assert_eq!(alex.len(), 1);
    assert_eq!(alex[0].role, "Team Lead");

    // Alpha 5, bravo 4, Sophia from the api-integration snapshot, then the
    // five charlie members not seen yet.
    assert_eq!(roster.len(), 15);
}

// ---------------------------------------------------------------------------
// Test: chat team synthesis
// ---------------------------------------------------------------------------

/// Each space becomes a project team; members resolve to users or placeholders.
#[test]
fn chat_teams_resolve_members_to_users() {
    let ws = workspace();
    let teams = ws.chat_teams();
    assert_eq!(teams.len(), 6);

    let marketing = teams
        .iter()
        .find(|t| t.id == "marketing-campaign")
        .expect("space team");
    assert_eq!(marketing.kind, TeamKind::Project);
    assert_eq!(marketing.channels[0].id, "c-marketing-campaign-general");

    let emma = &marketing.members[0];
    assert_eq!(emma.id, "u-emma");
    assert_eq!(emma.role(), Some("Member"));

    let liam = &marketing.members[1];
    assert_eq!(liam.id, "u19");
    assert_eq!(
        liam.profile,
        UserProfile::Directory {
            role: "Marketing Specialist".into()
        }
    );
}
