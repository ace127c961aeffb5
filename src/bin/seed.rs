// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loads a fixed week of demo activities into the planning backend.
//!
//! One-off utility for local testing. Activities are created one at a
//! time; a failure is logged and the next one is attempted.

use clap::Parser;
use planning_client::{
    config::Config,
    models::{ActivityInput, NativeActivity, Priority, Status, UserId},
    services::PlanningClient,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "planning-seed", about = "Create demo activities for a user")]
struct Cli {
    /// Owner of the demo activities
    #[arg(long, default_value_t = 2)]
    user_id: UserId,
}

struct DemoActivity {
    titre: &'static str,
    description: &'static str,
    debut: &'static str,
    fin: &'static str,
    priorite: Priority,
    statut: Status,
}

const DEMO_ACTIVITIES: &[DemoActivity] = &[
    DemoActivity {
        titre: "Rapport mensuel",
        description: "Synthèse décembre",
        debut: "2025-12-22T10:00:00",
        fin: "2025-12-22T12:00:00",
        priorite: Priority::Haute,
        statut: Status::EnCours,
    },
    DemoActivity {
        titre: "Réunion client",
        description: "Présentation projet",
        debut: "2025-12-23T14:00:00",
        fin: "2025-12-23T15:30:00",
        priorite: Priority::Haute,
        statut: Status::Planifie,
    },
    DemoActivity {
        titre: "Formation SQL",
        description: "Optimisation requêtes",
        debut: "2025-12-24T09:00:00",
        fin: "2025-12-24T12:00:00",
        priorite: Priority::Normale,
        statut: Status::Planifie,
    },
    DemoActivity {
        titre: "Gym",
        description: "Session cardio",
        debut: "2025-12-24T18:00:00",
        fin: "2025-12-24T19:00:00",
        priorite: Priority::Basse,
        statut: Status::Planifie,
    },
    DemoActivity {
        titre: "Révision code",
        description: "Review tickets",
        debut: "2025-12-25T09:00:00",
        fin: "2025-12-25T11:00:00",
        priorite: Priority::Normale,
        statut: Status::Termine,
    },
    DemoActivity {
        titre: "Réunion équipe",
        description: "Standup",
        debut: "2025-12-26T09:30:00",
        fin: "2025-12-26T10:00:00",
        priorite: Priority::Haute,
        statut: Status::Termine,
    },
    DemoActivity {
        titre: "Documentation API",
        description: "API REST endpoints",
        debut: "2025-12-26T14:00:00",
        fin: "2025-12-26T17:00:00",
        priorite: Priority::Normale,
        statut: Status::EnCours,
    },
    DemoActivity {
        titre: "Yoga",
        description: "Séance relaxation",
        debut: "2025-12-27T17:00:00",
        fin: "2025-12-27T18:00:00",
        priorite: Priority::Basse,
        statut: Status::Planifie,
    },
    DemoActivity {
        titre: "Réunion planning",
        description: "Sprint planning",
        debut: "2025-12-28T09:00:00",
        fin: "2025-12-28T10:30:00",
        priorite: Priority::Haute,
        statut: Status::Planifie,
    },
    DemoActivity {
        titre: "Développement feature",
        description: "Fatigue index",
        debut: "2025-12-28T11:00:00",
        fin: "2025-12-28T14:00:00",
        priorite: Priority::Haute,
        statut: Status::EnCours,
    },
    DemoActivity {
        titre: "Test unitaire",
        description: "Couverture 80%",
        debut: "2025-12-28T14:30:00",
        fin: "2025-12-28T16:00:00",
        priorite: Priority::Normale,
        statut: Status::Planifie,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = PlanningClient::new(&config)?;
    let api = client.activities(cli.user_id);

    tracing::info!(
        user_id = cli.user_id,
        count = DEMO_ACTIVITIES.len(),
        base_url = %config.api_base_url,
        "Seeding demo activities"
    );

    let mut created = 0;
    for demo in DEMO_ACTIVITIES {
        let titre = demo.titre;
        let input = ActivityInput::from(NativeActivity {
            titre: titre.to_string(),
            description: Some(demo.description.to_string()),
            debut: Some(demo.debut.to_string()),
            fin: Some(demo.fin.to_string()),
            priorite: Some(demo.priorite),
            statut: Some(demo.statut),
            user_id: Some(cli.user_id),
            ..Default::default()
        });

        match api.create(&input).await {
            Ok(reply) => {
                created += 1;
                tracing::info!(titre, reply = %reply, "Created");
            }
            Err(e) => tracing::error!(titre, error = %e, "Failed"),
        }
    }

    tracing::info!(created, total = DEMO_ACTIVITIES.len(), "Done");
    Ok(())
}
