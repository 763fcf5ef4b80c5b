//! Embassy staff register (`gov_employe`).

use super::{FilterSpec, ModuleConfig};
use chancery_schema::{
    DynamicFieldSchema, FieldSchema, ModuleSchema, Record, ReferenceList, Rule, SortDirection,
};
use std::sync::Arc;

fn sexes() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "sexes",
        &[(1, "Masculin"), (2, "Féminin")],
    ))
}

fn marital_statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "marital_statuses",
        &[
            (1, "Célibataire"),
            (2, "Marié(e)"),
            (3, "Divorcé(e)"),
            (4, "Veuf/Veuve"),
        ],
    ))
}

fn nationalities() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "nationalities",
        &[(1, "Nigérienne"), (2, "Française"), (3, "Autre")],
    ))
}

fn contract_types() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "contract_types",
        &[(1, "CDI"), (2, "CDD"), (3, "Stage"), (4, "Consultant")],
    ))
}

fn statuses() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "employee_statuses",
        &[(1, "Actif"), (2, "Inactif"), (3, "Suspendu"), (4, "Retraité")],
    ))
}

fn roles() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "roles",
        &[
            (1, "Ambassadeur"),
            (2, "Conseiller"),
            (3, "Attaché"),
            (4, "Agent"),
            (5, "Secrétaire"),
        ],
    ))
}

fn positions() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "positions",
        &[
            (1, "Ambassadeur"),
            (2, "Conseiller Consulaire"),
            (3, "Attachée Administrative"),
            (4, "Agent de Sécurité"),
            (5, "Secrétaire"),
        ],
    ))
}

fn directions() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "directions",
        &[
            (1, "Direction Générale"),
            (2, "Services Consulaires"),
            (3, "Administration"),
            (4, "Sécurité"),
        ],
    ))
}

fn services() -> Arc<ReferenceList> {
    Arc::new(ReferenceList::new(
        "services",
        &[
            (1, "Cabinet"),
            (2, "Consulat"),
            (3, "Administration Générale"),
            (4, "Sécurité"),
        ],
    ))
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: i64,
    matricule: &str,
    last: &str,
    first: &str,
    sex: i64,
    birth: (&str, &str),
    marital: i64,
    contact: (&str, &str, &str),
    assignment: (i64, i64, i64, i64),
    hired: &str,
    papers: (&str, &str),
    created: &str,
) -> Record {
    Record::new()
        .with("gov_employe_id", id)
        .with("gov_employe_matricule", matricule)
        .with("org_id", "AMB_NIGER_PARIS")
        .with("gov_employe_last_name", last)
        .with("gov_employe_first_name", first)
        .with("gov_employe_sex_id", sex)
        .with("gov_employe_birth_date", birth.0)
        .with("gov_employe_birth_place", birth.1)
        .with("gov_employe_nationality_id", 1)
        .with("gov_employe_marital_status_id", marital)
        .with("gov_employe_telephone", contact.0)
        .with("gov_employe_email", contact.1)
        .with("gov_employe_adress", contact.2)
        .with("gov_employe_role_id", assignment.0)
        .with("gov_employe_position_id", assignment.1)
        .with("gov_employe_direction_id", assignment.2)
        .with("gov_employe_service_id", assignment.3)
        .with("gov_employe_hired_date", hired)
        .with("gov_employe_start_service_date", hired)
        .with("gov_employe_contract_type_id", 1)
        .with("gov_employe_status_id", 1)
        .with("gov_employe_cni", papers.0)
        .with("gov_employe_passeport", papers.1)
        .with("created", created)
        .with("createdby", 1)
}

fn seeds() -> Vec<Record> {
    vec![
        employee(
            1,
            "AMB001",
            "ADAMOU",
            "Yahouza",
            1,
            ("1975-03-15", "Niamey"),
            2,
            (
                "+33 1 45 04 80 60",
                "yahouza.adamou@ambassade-niger.org",
                "154 Rue de Longchamp, 75116 Paris",
            ),
            (1, 1, 1, 1),
            "2020-01-15",
            ("NE123456789", "NE987654321"),
            "2020-01-10T08:00:00",
        ),
        employee(
            2,
            "CON001",
            "MAIJIMAA",
            "Yahaya",
            1,
            ("1980-07-22", "Zinder"),
            2,
            (
                "+33 1 45 04 80 61",
                "yahaya.maijimaa@ambassade-niger.org",
                "25 Avenue Victor Hugo, 75016 Paris",
            ),
            (2, 2, 2, 2),
            "2019-03-01",
            ("NE234567890", "NE876543210"),
            "2019-02-25T08:00:00",
        ),
        employee(
            3,
            "ADM001",
            "IBRAHIM",
            "Aïcha",
            2,
            ("1985-11-08", "Maradi"),
            1,
            (
                "+33 1 45 04 80 62",
                "aicha.ibrahim@ambassade-niger.org",
                "12 Rue de la Pompe, 75016 Paris",
            ),
            (3, 3, 3, 3),
            "2021-06-01",
            ("NE345678901", "NE765432109"),
            "2021-05-25T08:00:00",
        ),
        employee(
            4,
            "SEC001",
            "MOUSSA",
            "Abdoulaye",
            1,
            ("1978-12-03", "Tahoua"),
            2,
            (
                "+33 1 45 04 80 63",
                "abdoulaye.moussa@ambassade-niger.org",
                "8 Boulevard Murat, 75016 Paris",
            ),
            (4, 4, 4, 4),
            "2018-09-15",
            ("NE456789012", "NE654321098"),
            "2018-09-10T08:00:00",
        ),
    ]
}

pub(super) fn config() -> ModuleConfig {
    let role_list = roles();
    let status_list = statuses();
    ModuleConfig {
        key: "employees",
        group: "Employés",
        title: "Liste des employés",
        description: "Personnel de la mission diplomatique",
        schema: ModuleSchema {
            id_field: "gov_employe_id",
            discriminator: None,
            fields: vec![
                FieldSchema::text("org_id", "Organisation").default_value("AMB_NIGER_PARIS"),
                FieldSchema::text("gov_employe_matricule", "Matricule").required(),
                FieldSchema::text("gov_employe_last_name", "Nom").required(),
                FieldSchema::text("gov_employe_first_name", "Prénom").required(),
                FieldSchema::select("gov_employe_sex_id", "Sexe", sexes()),
                FieldSchema::date("gov_employe_birth_date", "Date de naissance"),
                FieldSchema::text("gov_employe_birth_place", "Lieu de naissance"),
                FieldSchema::select("gov_employe_nationality_id", "Nationalité", nationalities()),
                FieldSchema::select(
                    "gov_employe_marital_status_id",
                    "Situation matrimoniale",
                    marital_statuses(),
                ),
                FieldSchema::text("gov_employe_telephone", "Téléphone"),
                FieldSchema::text("gov_employe_email", "Email"),
                FieldSchema::text("gov_employe_adress", "Adresse"),
                FieldSchema::select("gov_employe_role_id", "Rôle", role_list.clone()),
                FieldSchema::select("gov_employe_position_id", "Poste", positions()),
                FieldSchema::select("gov_employe_direction_id", "Direction", directions()),
                FieldSchema::select("gov_employe_service_id", "Service", services()),
                FieldSchema::date("gov_employe_hired_date", "Date d'embauche"),
                FieldSchema::date("gov_employe_start_service_date", "Prise de service"),
                FieldSchema::select(
                    "gov_employe_contract_type_id",
                    "Type de contrat",
                    contract_types(),
                ),
                FieldSchema::select("gov_employe_status_id", "Statut", status_list.clone()),
                FieldSchema::text("gov_employe_cni", "CNI"),
                FieldSchema::text("gov_employe_passeport", "Passeport"),
            ],
            dynamic: DynamicFieldSchema::empty(),
            rules: vec![
                Rule::Required {
                    field: "gov_employe_matricule",
                    message: "Matricule requis",
                },
                Rule::Required {
                    field: "gov_employe_last_name",
                    message: "Nom requis",
                },
                Rule::Required {
                    field: "gov_employe_first_name",
                    message: "Prénom requis",
                },
                Rule::DateOrder {
                    start: "gov_employe_hired_date",
                    end: "gov_employe_start_service_date",
                    message: "La prise de service ne peut précéder l'embauche",
                },
            ],
        },
        filters: vec![
            FilterSpec::text("gov_employe_last_name", "Nom"),
            FilterSpec::text("gov_employe_matricule", "Matricule"),
            FilterSpec::reference("gov_employe_role_id", "Rôle", role_list),
            FilterSpec::reference("gov_employe_status_id", "Statut", status_list),
        ],
        columns: vec![
            "gov_employe_matricule",
            "gov_employe_last_name",
            "gov_employe_first_name",
            "gov_employe_role_id",
            "gov_employe_service_id",
            "gov_employe_status_id",
        ],
        default_sort: ("gov_employe_last_name", SortDirection::Ascending),
        seeds: seeds(),
    }
}
