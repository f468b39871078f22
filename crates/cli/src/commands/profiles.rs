//! Commande de listage des profils

use helix_replication::OrganismProfile;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profil")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Vitesse (bp/s)")]
    speed: f64,
    #[tabled(rename = "Fragments (nt)")]
    fragments: String,
    #[tabled(rename = "Amorces (nt)")]
    primers: String,
    #[tabled(rename = "Nucléosomes")]
    nucleosomes: String,
}

fn row(name: &str, profile: &OrganismProfile) -> ProfileRow {
    ProfileRow {
        name: name.to_string(),
        kind: format!("{:?}", profile.kind),
        speed: profile.polymerase_speed,
        fragments: format!(
            "[{}, {}]",
            profile.fragment_size_range.0, profile.fragment_size_range.1
        ),
        primers: format!(
            "[{}, {}]",
            profile.primer_length_range.0, profile.primer_length_range.1
        ),
        nucleosomes: if profile.has_nucleosomes { "oui" } else { "non" }.to_string(),
    }
}

pub fn run() {
    let rows = vec![
        row("ecoli", &OrganismProfile::e_coli()),
        row("human", &OrganismProfile::human()),
    ];

    println!("{}", Table::new(rows));
}
