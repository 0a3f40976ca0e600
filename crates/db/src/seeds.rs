//! Default data written to an empty store on first load.

use teamspace_core::board::{ColumnId, Priority};
use teamspace_core::naming::{avatar_url, MEMBER_AVATAR_SIZE, USER_AVATAR_SIZE};
use teamspace_core::types::Timestamp;

use crate::board::TaskBoard;
use crate::models::chat::{Channel, ChatTeam, Dm, Message, TeamKind, Visibility};
use crate::models::doc::Doc;
use crate::models::squad::{Member, Squad};
use crate::models::space::Space;
use crate::models::task::{Assignee, Task};
use crate::models::user::{User, UserProfile};
use crate::models::video_note::VideoNote;
use crate::resolver;

/// Id of the local user: owner of synthesized teams and author of sent messages.
pub const CURRENT_USER_ID: &str = "u1";

/// Author of the welcome message in every synthesized space channel.
pub const WELCOME_AUTHOR_ID: &str = "u2";

const DEMO_VIDEO_URL: &str = "https://storage.googleapis.com/web-dev-assets/video-canvas-bjj.mp4";

fn chat_user(id: &str, name: &str, online: bool) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar_url(&name.to_lowercase(), USER_AVATAR_SIZE),
        profile: UserProfile::Chat { online },
    }
}

fn directory_user(id: &str, name: &str, role: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar_url(&name.to_lowercase(), MEMBER_AVATAR_SIZE),
        profile: UserProfile::Directory {
            role: role.to_string(),
        },
    }
}

fn member(name: &str, role: &str, user_id: Option<&str>) -> Member {
    Member {
        name: name.to_string(),
        avatar: avatar_url(&name.to_lowercase(), MEMBER_AVATAR_SIZE),
        role: role.to_string(),
        user_id: user_id.map(str::to_string),
    }
}

pub fn users() -> Vec<User> {
    vec![
        chat_user("u1", "Alice", true),
        chat_user("u2", "Bob", false),
        chat_user("u3", "Charlie", true),
        chat_user("u4", "David", true),
        chat_user("u5", "Eve", false),
        chat_user("u6", "Frank", true),
        directory_user("u7", "Alex", "Team Lead"),
        directory_user("u8", "Sam", "Backend Engineer"),
        directory_user("u9", "Jordan", "Frontend Engineer"),
        directory_user("u10", "Chris", "QA Engineer"),
        directory_user("u11", "Taylor", "DevOps"),
        directory_user("u12", "Olivia", "Team Lead"),
        directory_user("u13", "Jackson", "iOS Developer"),
        directory_user("u14", "Isabella", "Android Developer"),
        directory_user("u15", "William", "Backend Engineer"),
        directory_user("u16", "Sophia", "Content Strategist"),
        directory_user("u17", "Mason", "SEO Expert"),
        directory_user("u18", "Ava", "Data Analyst"),
        directory_user("u19", "Liam", "Marketing Specialist"),
        directory_user("u20", "Noah", "UI/UX Designer"),
    ]
}

pub fn squads() -> Vec<Squad> {
    vec![
        Squad {
            id: "alpha-squad".into(),
            name: "Alpha Squad".into(),
            description: "Focused on core product features and backend infrastructure.".into(),
            members: vec![
                member("Alex", "Team Lead", Some("u7")),
                member("Sam", "Backend Engineer", Some("u8")),
                member("Jordan", "Frontend Engineer", Some("u9")),
                member("Chris", "QA Engineer", Some("u10")),
                member("Taylor", "DevOps", Some("u11")),
            ],
        },
        Squad {
            id: "bravo-squad".into(),
            name: "Bravo Squad".into(),
            description: "Dedicated to mobile app development and new platform integrations."
                .into(),
            members: vec![
                member("Olivia", "Team Lead", Some("u12")),
                member("Jackson", "iOS Developer", Some("u13")),
                member("Isabella", "Android Developer", Some("u14")),
                member("William", "Backend Engineer", Some("u15")),
            ],
        },
        Squad {
            id: "charlie-squad".into(),
            name: "Charlie Squad".into(),
            description: "Growth team focused on marketing, analytics, and user acquisition."
                .into(),
            members: vec![
                member("Emma", "Growth Lead", None),
                member("Liam", "Marketing Specialist", Some("u19")),
                member("Ava", "Data Analyst", Some("u18")),
                member("Noah", "UI/UX Designer", Some("u20")),
                member("Sophia", "Content Strategist", Some("u16")),
                member("Mason", "SEO Expert", Some("u17")),
            ],
        },
    ]
}

/// Seed spaces. Their rosters are the historical snapshots, with empty roles,
/// not the current projections of their squads.
pub fn spaces() -> Vec<Space> {
    vec![
        Space {
            id: "website-redesign".into(),
            name: "Website Redesign".into(),
            description: "Modernize the company website and improve user experience.".into(),
            progress: 75,
            members: vec![
                member("Alex", "", Some("u7")),
                member("Sam", "", Some("u8")),
                member("Jordan", "", Some("u9")),
                member("Chris", "", Some("u10")),
                member("Taylor", "", Some("u11")),
            ],
            squad_id: Some("alpha-squad".into()),
        },
        Space {
            id: "mobile-app-launch".into(),
            name: "Mobile App Launch".into(),
            description: "Launch the new mobile app for iOS and Android.".into(),
            progress: 40,
            members: vec![
                member("Olivia", "", Some("u12")),
                member("Jackson", "", Some("u13")),
                member("Isabella", "", Some("u14")),
            ],
            squad_id: Some("bravo-squad".into()),
        },
        Space {
            id: "api-integration".into(),
            name: "API Integration".into(),
            description: "Integrate with third-party APIs for enhanced functionality.".into(),
            progress: 90,
            members: vec![
                member("William", "", Some("u15")),
                member("Sophia", "", Some("u16")),
            ],
            squad_id: None,
        },
        Space {
            id: "marketing-campaign".into(),
            name: "Marketing Campaign".into(),
            description: "Plan and execute the Q3 marketing campaign.".into(),
            progress: 20,
            members: vec![
                member("Emma", "", None),
                member("Liam", "", Some("u19")),
                member("Ava", "", Some("u18")),
                member("Noah", "", Some("u20")),
            ],
            squad_id: Some("charlie-squad".into()),
        },
    ]
}

pub fn docs(now: Timestamp) -> Vec<Doc> {
    vec![
        Doc {
            id: "doc-1".into(),
            title: "Project Phoenix Onboarding".into(),
            description: "A guide for new members joining the Project Phoenix space.".into(),
            content: "# Welcome to Project Phoenix! \n\nThis document outlines the goals, roadmap, and key contacts for this initiative.".into(),
            space_id: Some("website-redesign".into()),
            created_at: now,
        },
        Doc {
            id: "doc-2".into(),
            title: "API Style Guide".into(),
            description: "Guidelines for designing and implementing APIs across the organization."
                .into(),
            content: "# API Style Guide \n\nFollow these conventions to ensure consistency."
                .into(),
            space_id: None,
            created_at: now,
        },
    ]
}

pub fn video_notes(now: Timestamp) -> Vec<VideoNote> {
    vec![
        VideoNote {
            id: "vn-1".into(),
            title: "Design Walkthrough for New Dashboard".into(),
            description:
                "A quick walkthrough of the latest Figma designs for the new user dashboard."
                    .into(),
            content: None,
            space_id: Some("website-redesign".into()),
            created_at: now,
            video_url: Some(DEMO_VIDEO_URL.into()),
        },
        VideoNote {
            id: "vn-2".into(),
            title: "Backend Refactor Plan".into(),
            description: "Explaining the proposed changes to the authentication service.".into(),
            content: Some(
                "# API Style Guide \n\nFollow these conventions to ensure consistency.".into(),
            ),
            space_id: Some("api-integration".into()),
            created_at: now,
            video_url: Some(DEMO_VIDEO_URL.into()),
        },
    ]
}

fn task(id: &str, title: &str, priority: Priority, tags: &[&str], points: u32, who: &str) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        priority,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        points,
        assignee: Assignee {
            name: who.to_string(),
            avatar: avatar_url(&who.to_lowercase(), MEMBER_AVATAR_SIZE),
        },
    }
}

/// The demo board every space starts with.
pub fn task_board() -> TaskBoard {
    let mut board = TaskBoard::empty();
    board.replace_column(
        ColumnId::Todo,
        vec![
            task("task-1", "Setup CI/CD pipeline", Priority::High, &["DevOps"], 8, "Alex"),
            task("task-2", "Design user profile page", Priority::Medium, &["UI/UX", "Design"], 5, "Sam"),
            task("task-3", "Onboarding flow illustrations", Priority::Low, &["Design"], 3, "Jordan"),
        ],
    );
    board.replace_column(
        ColumnId::InProgress,
        vec![
            task("task-4", "Implement authentication flow", Priority::High, &["Backend", "Security"], 8, "Chris"),
            task("task-5", "Develop dashboard components", Priority::Medium, &["Frontend", "React"], 13, "Taylor"),
        ],
    );
    board.replace_column(
        ColumnId::Done,
        vec![
            task("task-6", "Create project wireframes", Priority::Low, &["Design", "UX"], 3, "Jordan"),
            task("task-7", "Setup project repository", Priority::Medium, &["DevOps"], 2, "Alex"),
        ],
    );
    board
}

fn pick_users(users: &[User], ids: &[&str]) -> Vec<User> {
    users
        .iter()
        .filter(|u| ids.contains(&u.id.as_str()))
        .cloned()
        .collect()
}

/// Teams that exist independently of any space.
pub fn chat_teams(users: &[User]) -> Vec<ChatTeam> {
    vec![
        ChatTeam {
            id: "t2".into(),
            name: "Engineering".into(),
            kind: TeamKind::Department,
            description: "Core engineering team".into(),
            owner: "u2".into(),
            members: pick_users(users, &["u2", "u4", "u6"]),
            visibility: Visibility::Private,
            icon: avatar_url("eng", USER_AVATAR_SIZE),
            channels: vec![Channel {
                id: "c3".into(),
                team_id: "t2".into(),
                name: "Deployments".into(),
                messages: vec![Message {
                    id: "m8".into(),
                    user_id: "u4".into(),
                    text: "Staging deployment is complete.".into(),
                    timestamp: "Yesterday".into(),
                }],
            }],
        },
        ChatTeam {
            id: "t3".into(),
            name: "Marketing".into(),
            kind: TeamKind::Group,
            description: "Marketing and growth".into(),
            owner: "u3".into(),
            members: pick_users(users, &["u3", "u5"]),
            visibility: Visibility::Public,
            icon: avatar_url("market", USER_AVATAR_SIZE),
            channels: vec![],
        },
    ]
}

pub fn direct_messages(users: &[User]) -> Vec<Dm> {
    let user = |id: &str| resolver::user_by_id_or_placeholder(users, id);
    vec![
        Dm {
            id: "d1".into(),
            members: [user("u1"), user("u2")],
            messages: vec![
                Message {
                    id: "m9".into(),
                    user_id: "u1".into(),
                    text: "Hey Bob, can we sync up later today?".into(),
                    timestamp: "9:00 AM".into(),
                },
                Message {
                    id: "m10".into(),
                    user_id: "u2".into(),
                    text: "Sure, how about 3pm?".into(),
                    timestamp: "9:05 AM".into(),
                },
            ],
        },
        Dm {
            id: "d2".into(),
            members: [user("u1"), user("u4")],
            messages: vec![],
        },
    ]
}
