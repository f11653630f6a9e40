//! Built-in regional content: quiz questions, profiles, the role table,
//! support programmes, skills statements and the events calendar.

use chrono::NaiveDate;

use crate::catalog::models::{
    Career, DemandLevel, LocalOpportunities, Profile, Progression, QuizOption, QuizQuestion,
    RoleEntry, Skill,
};
use crate::catalog::tags::Tag;
use crate::eligibility::{EmploymentStatus, Programme};
use crate::events::{Event, EventCategory};
use crate::skills::{SkillCategory, SkillStatement};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn option(id: &str, text: &str, tags: &[Tag]) -> QuizOption {
    QuizOption {
        id: id.to_string(),
        text: text.to_string(),
        tags: tags.to_vec(),
    }
}

fn question(id: u32, stage: u8, text: &str, options: Vec<QuizOption>) -> QuizQuestion {
    QuizQuestion {
        id,
        stage,
        text: text.to_string(),
        options,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Quiz questions
// ────────────────────────────────────────────────────────────────────────────

pub fn questions() -> Vec<QuizQuestion> {
    use Tag::*;

    vec![
        question(
            1,
            1,
            "Which subject did you enjoy most at school or college?",
            vec![
                option("a", "Computing or maths", &[DigitalTech, Analytical]),
                option("b", "Art, media or music", &[CreativeMedia, Creative]),
                option("c", "Biology, health or PE", &[HealthCare, Caring]),
                option("d", "Design and technology", &[Engineering, Practical]),
                option("e", "Business studies or economics", &[BusinessFinance]),
            ],
        ),
        question(
            2,
            1,
            "Where would you most like to spend your working day?",
            vec![
                option("a", "A modern office full of technology", &[DigitalTech, BusinessFinance]),
                option("b", "A studio or on a film set", &[CreativeMedia]),
                option("c", "A hospital, care home or school", &[HealthCare, Education]),
                option("d", "Outdoors or on site", &[Construction, GreenEnergy]),
                option("e", "A busy hotel, venue or restaurant", &[Hospitality]),
            ],
        ),
        question(
            3,
            1,
            "What do friends usually ask you to help with?",
            vec![
                option("a", "Fixing their phone or laptop", &[DigitalTech, Practical]),
                option("b", "Budgeting or planning", &[BusinessFinance, Organised]),
                option("c", "Talking things through", &[Caring]),
                option("d", "Making something look good", &[CreativeMedia, Creative]),
                option("e", "Organising a party or trip", &[Hospitality, Leadership, Organised]),
            ],
        ),
        question(
            4,
            1,
            "Which local headline would you most like to be part of?",
            vec![
                option("a", "Regional start-up launches award-winning app", &[DigitalTech]),
                option("b", "New offshore wind farm powers 50,000 homes", &[GreenEnergy, Engineering]),
                option("c", "Hospital cuts waiting times by a third", &[HealthCare]),
                option("d", "Distribution hub opens, creating 800 jobs", &[Logistics]),
                option("e", "Major drama series filmed on the coast", &[CreativeMedia]),
            ],
        ),
        question(
            5,
            1,
            "How do you prefer to learn something new?",
            vec![
                option("a", "On the job, through an apprenticeship", &[Practical, Construction]),
                option("b", "Studying the theory in depth", &[Analytical, Education]),
                option("c", "Short online courses at my own pace", &[DigitalTech]),
                option("d", "Being shown by someone experienced", &[Caring, Education]),
            ],
        ),
        question(
            6,
            2,
            "When you work in a team, you usually…",
            vec![
                option("a", "Take the lead", &[Leadership]),
                option("b", "Keep everyone on schedule", &[Organised]),
                option("c", "Come up with the ideas", &[Creative]),
                option("d", "Make sure everyone is OK", &[Caring]),
                option("e", "Dig into the numbers", &[Analytical]),
            ],
        ),
        question(
            7,
            2,
            "What matters most to you in a job?",
            vec![
                option("a", "Good pay and clear progression", &[BusinessFinance, Leadership]),
                option("b", "Helping people every day", &[HealthCare, Caring, Education]),
                option("c", "Making a difference for the planet", &[GreenEnergy]),
                option("d", "Variety and getting out and about", &[Logistics, Hospitality]),
                option("e", "Expressing myself", &[CreativeMedia, Creative]),
            ],
        ),
        question(
            8,
            2,
            "Pick the task you would enjoy most.",
            vec![
                option("a", "Building a website", &[DigitalTech, Creative]),
                option("b", "Planning delivery routes", &[Logistics, Organised, Analytical]),
                option("c", "Installing solar panels", &[GreenEnergy, Engineering, Practical]),
                option("d", "Running a workshop for a class", &[Education, Leadership]),
                option("e", "Managing a project budget", &[BusinessFinance, Analytical]),
            ],
        ),
        question(
            9,
            2,
            "How do you tackle a problem?",
            vec![
                option("a", "Work through it logically, step by step", &[Analytical]),
                option("b", "Get hands-on and try things", &[Practical]),
                option("c", "Talk it over with others", &[Caring, Leadership]),
                option("d", "Look for a completely new angle", &[Creative]),
            ],
        ),
        question(
            10,
            2,
            "Where do you see yourself in five years?",
            vec![
                option("a", "Running my own business", &[BusinessFinance, Leadership]),
                option("b", "A qualified tradesperson", &[Construction, Practical]),
                option("c", "A specialist in technology", &[DigitalTech, Analytical]),
                option("d", "A senior nurse or teacher", &[HealthCare, Education]),
                option("e", "Managing a venue or hotel", &[Hospitality, Organised]),
            ],
        ),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Profiles
// ────────────────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn career(
    title: &str,
    description: &str,
    salary_range: &str,
    demand: DemandLevel,
    ladder: [&str; 3],
    employers: &[&str],
    courses: &[&str],
) -> Career {
    Career {
        title: title.to_string(),
        description: description.to_string(),
        salary_range: salary_range.to_string(),
        demand,
        progression: Progression {
            entry: ladder[0].to_string(),
            mid: ladder[1].to_string(),
            senior: ladder[2].to_string(),
        },
        local_opportunities: LocalOpportunities {
            employers: strings(employers),
            courses: strings(courses),
        },
    }
}

fn skill(name: &str, description: &str) -> Skill {
    Skill {
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn profiles() -> Vec<Profile> {
    use Tag::*;

    vec![
        Profile {
            tag: Analytical,
            title: "The Problem Solver".to_string(),
            description: "You like to understand how things work and enjoy finding the answer \
                          hidden in the detail."
                .to_string(),
            traits: strings(&["Logical", "Curious", "Detail-focused"]),
            recommended_sectors: vec![DigitalTech, BusinessFinance, Engineering, GreenEnergy],
            careers: vec![
                career(
                    "Data Analyst",
                    "Turns raw data into insight that shapes business decisions.",
                    "£24,000 – £45,000",
                    DemandLevel::VeryHigh,
                    ["Junior Data Analyst", "Data Analyst", "Head of Data"],
                    &["Sage", "Northumbrian Water", "NHS Business Services Authority"],
                    &["Level 4 Data Analyst Apprenticeship", "Data Skills Bootcamp"],
                ),
                career(
                    "Software Developer",
                    "Designs, builds and tests the software people use every day.",
                    "£25,000 – £60,000",
                    DemandLevel::VeryHigh,
                    ["Junior Developer", "Software Engineer", "Lead Engineer"],
                    &["Sage", "Ubisoft Reflections", "Accenture"],
                    &["Software Development Bootcamp", "BSc Computer Science"],
                ),
            ],
            skills: vec![
                skill("Critical thinking", "Weighing evidence before reaching a conclusion."),
                skill("Numeracy", "Working confidently with figures and data."),
            ],
        },
        Profile {
            tag: Creative,
            title: "The Creator".to_string(),
            description: "You bring ideas to life and look at the world a little differently."
                .to_string(),
            traits: strings(&["Imaginative", "Expressive", "Original"]),
            recommended_sectors: vec![CreativeMedia, DigitalTech, Hospitality],
            careers: vec![career(
                "Digital Content Producer",
                "Plans and creates video, audio and social content for brands.",
                "£21,000 – £38,000",
                DemandLevel::Growing,
                ["Content Assistant", "Content Producer", "Creative Director"],
                &["BBC", "Northern Film & Media", "Mediaworks"],
                &["Level 3 Content Creator Apprenticeship", "Creative Media HND"],
            )],
            skills: vec![
                skill("Visual communication", "Getting a message across with design."),
                skill("Storytelling", "Shaping ideas into something people remember."),
            ],
        },
        Profile {
            tag: Caring,
            title: "The Helper".to_string(),
            description: "You are happiest when you are making a real difference to someone."
                .to_string(),
            traits: strings(&["Empathetic", "Patient", "Supportive"]),
            recommended_sectors: vec![HealthCare, Education, Hospitality],
            careers: vec![
                career(
                    "Healthcare Assistant",
                    "Supports nurses and patients on hospital wards and in the community.",
                    "£22,000 – £27,000",
                    DemandLevel::VeryHigh,
                    ["Healthcare Assistant", "Nursing Associate", "Registered Nurse"],
                    &["Newcastle upon Tyne Hospitals NHS Trust", "South Tees Hospitals"],
                    &["Care Certificate", "Nursing Associate Apprenticeship"],
                ),
                career(
                    "Teaching Assistant",
                    "Helps pupils learn, one-to-one and in small groups.",
                    "£18,000 – £24,000",
                    DemandLevel::High,
                    ["Teaching Assistant", "Higher Level TA", "Qualified Teacher"],
                    &["Local primary academies", "Special educational needs schools"],
                    &["Level 3 Teaching Assistant Apprenticeship"],
                ),
            ],
            skills: vec![
                skill("Active listening", "Understanding what someone really needs."),
                skill("Resilience", "Staying calm and kind under pressure."),
            ],
        },
        Profile {
            tag: Practical,
            title: "The Maker".to_string(),
            description: "You like to get stuck in and see the results of your work.".to_string(),
            traits: strings(&["Hands-on", "Reliable", "Resourceful"]),
            recommended_sectors: vec![Construction, Engineering, GreenEnergy, Logistics],
            careers: vec![
                career(
                    "Electrician",
                    "Installs and maintains electrical systems in homes and businesses.",
                    "£25,000 – £42,000",
                    DemandLevel::High,
                    ["Apprentice Electrician", "Qualified Electrician", "Contracts Manager"],
                    &["Esh Group", "Northern Powergrid"],
                    &["Level 3 Installation Electrician Apprenticeship"],
                ),
                career(
                    "Wind Turbine Technician",
                    "Keeps onshore and offshore turbines running safely.",
                    "£26,000 – £45,000",
                    DemandLevel::Growing,
                    ["Trainee Technician", "Wind Turbine Technician", "Site Manager"],
                    &["Siemens Gamesa", "Equinor", "SSE Renewables"],
                    &["GWO Basic Safety Training", "Level 3 Engineering Technician"],
                ),
            ],
            skills: vec![
                skill("Technical know-how", "Using tools and equipment safely and well."),
                skill("Health and safety", "Spotting and managing risks on site."),
            ],
        },
        Profile {
            tag: Leadership,
            title: "The Leader".to_string(),
            description: "You motivate people and enjoy taking responsibility for results."
                .to_string(),
            traits: strings(&["Confident", "Decisive", "Motivating"]),
            recommended_sectors: vec![BusinessFinance, Hospitality, Logistics, Education],
            careers: vec![career(
                "Operations Manager",
                "Runs day-to-day operations and leads teams to hit targets.",
                "£30,000 – £55,000",
                DemandLevel::Steady,
                ["Team Leader", "Operations Manager", "Operations Director"],
                &["Nissan", "Amazon", "Greggs"],
                &["Level 5 Operations Manager Apprenticeship", "CMI Diploma"],
            )],
            skills: vec![
                skill("People management", "Getting the best from a team."),
                skill("Decision making", "Choosing a course of action and owning it."),
            ],
        },
        Profile {
            tag: Organised,
            title: "The Organiser".to_string(),
            description: "You bring order to chaos and make sure things get done on time."
                .to_string(),
            traits: strings(&["Methodical", "Dependable", "Efficient"]),
            recommended_sectors: vec![BusinessFinance, Logistics, HealthCare, DigitalTech],
            careers: vec![career(
                "Project Coordinator",
                "Keeps projects on track, on budget and everyone informed.",
                "£22,000 – £35,000",
                DemandLevel::High,
                ["Project Administrator", "Project Coordinator", "Programme Manager"],
                &["Tyne and Wear Metro", "Local authorities"],
                &["Level 4 Associate Project Manager Apprenticeship", "PRINCE2 Foundation"],
            )],
            skills: vec![
                skill("Planning", "Breaking work into achievable steps."),
                skill("Time management", "Prioritising the right tasks at the right time."),
            ],
        },
        Profile {
            tag: General,
            title: "The Explorer".to_string(),
            description: "You have a broad mix of interests. Talk to a careers adviser to \
                          explore the options that suit you best."
                .to_string(),
            traits: strings(&["Adaptable", "Open-minded"]),
            recommended_sectors: vec![],
            careers: vec![],
            skills: vec![
                skill("Adaptability", "Picking up new tasks and settings quickly."),
                skill("Communication", "Sharing ideas clearly with different people."),
            ],
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Sector → role table
// ────────────────────────────────────────────────────────────────────────────

pub fn roles() -> Vec<RoleEntry> {
    use Tag::*;

    let entry = |tag: Tag, roles: &[&str]| RoleEntry {
        tag,
        roles: strings(roles),
    };

    vec![
        entry(
            DigitalTech,
            &["Software Developer", "Data Analyst", "Cyber Security Analyst", "IT Support Technician"],
        ),
        entry(
            BusinessFinance,
            &["Accounts Assistant", "Data Analyst", "Financial Adviser", "Project Manager"],
        ),
        entry(
            CreativeMedia,
            &["Content Producer", "Graphic Designer", "Camera Operator", "Games Artist"],
        ),
        entry(
            HealthCare,
            &["Healthcare Assistant", "Nursing Associate", "Care Worker", "Pharmacy Technician"],
        ),
        entry(
            Engineering,
            &["Maintenance Engineer", "CAD Technician", "Quality Inspector", "Electrician"],
        ),
        entry(
            Construction,
            &["Electrician", "Site Supervisor", "Quantity Surveyor", "Project Manager"],
        ),
        entry(
            Hospitality,
            &["Chef", "Events Coordinator", "Hotel Receptionist", "Front of House Manager"],
        ),
        entry(
            Education,
            &["Teaching Assistant", "Early Years Practitioner", "Learning Mentor", "Trainer"],
        ),
        entry(
            GreenEnergy,
            &["Wind Turbine Technician", "Solar PV Installer", "Energy Assessor", "Electrician"],
        ),
        entry(
            Logistics,
            &["Warehouse Operative", "Transport Planner", "HGV Driver", "Supply Chain Coordinator"],
        ),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Support programmes
// ────────────────────────────────────────────────────────────────────────────

pub fn programmes() -> Vec<Programme> {
    use EmploymentStatus::*;

    vec![
        Programme {
            id: "youth-guarantee".to_string(),
            name: "Youth Guarantee".to_string(),
            description: "One-to-one coaching, work experience and paid placements for young \
                          people not in work."
                .to_string(),
            min_age: Some(16),
            max_age: Some(24),
            requires_residency: true,
            requires_right_to_work: true,
            statuses: vec![Unemployed],
            min_months_out_of_work: None,
            max_qualification_level: None,
        },
        Programme {
            id: "skills-bootcamp".to_string(),
            name: "Skills Bootcamps".to_string(),
            description: "Free, flexible courses of up to 16 weeks with a guaranteed job \
                          interview."
                .to_string(),
            min_age: Some(19),
            max_age: None,
            requires_residency: true,
            requires_right_to_work: true,
            statuses: vec![],
            min_months_out_of_work: None,
            max_qualification_level: None,
        },
        Programme {
            id: "career-change".to_string(),
            name: "Career Change Support".to_string(),
            description: "Guidance and funded retraining for working adults looking to move \
                          into a new sector."
                .to_string(),
            min_age: Some(25),
            max_age: None,
            requires_residency: true,
            requires_right_to_work: true,
            statuses: vec![Employed, AtRiskOfRedundancy],
            min_months_out_of_work: None,
            max_qualification_level: None,
        },
        Programme {
            id: "restart".to_string(),
            name: "Restart".to_string(),
            description: "Intensive support for people who have been out of work for six \
                          months or more."
                .to_string(),
            min_age: Some(18),
            max_age: None,
            requires_residency: true,
            requires_right_to_work: true,
            statuses: vec![Unemployed],
            min_months_out_of_work: Some(6),
            max_qualification_level: None,
        },
        Programme {
            id: "adult-skills".to_string(),
            name: "Adult Skills Fund".to_string(),
            description: "Fully funded courses for adults without a level 3 qualification."
                .to_string(),
            min_age: Some(19),
            max_age: None,
            requires_residency: true,
            requires_right_to_work: false,
            statuses: vec![],
            min_months_out_of_work: None,
            max_qualification_level: Some(2),
        },
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Skills self-assessment statements
// ────────────────────────────────────────────────────────────────────────────

pub fn skill_statements() -> Vec<SkillStatement> {
    use SkillCategory::*;

    let statement = |id: &str, category: SkillCategory, text: &str| SkillStatement {
        id: id.to_string(),
        category,
        text: text.to_string(),
    };

    vec![
        statement("comm-1", Communication, "I can explain an idea clearly to someone new to it."),
        statement("comm-2", Communication, "I listen carefully before I respond."),
        statement("team-1", Teamwork, "I share the workload fairly in a group."),
        statement("team-2", Teamwork, "I help resolve disagreements in a team."),
        statement("prob-1", ProblemSolving, "I break big problems down into smaller steps."),
        statement("prob-2", ProblemSolving, "I try more than one approach when stuck."),
        statement("dig-1", Digital, "I am confident using spreadsheets and online tools."),
        statement("dig-2", Digital, "I can keep myself safe and secure online."),
        statement("self-1", SelfManagement, "I plan my time to meet deadlines."),
        statement("self-2", SelfManagement, "I stay motivated without being told what to do."),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Events calendar
// ────────────────────────────────────────────────────────────────────────────

pub fn events() -> Vec<Event> {
    use EventCategory::*;

    #[allow(clippy::too_many_arguments)]
    fn event(
        id: &str,
        title: &str,
        category: EventCategory,
        location: &str,
        (y, m, d): (i32, u32, u32),
        online: bool,
        free: bool,
        summary: &str,
    ) -> Option<Event> {
        Some(Event {
            id: id.to_string(),
            title: title.to_string(),
            category,
            location: location.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            online,
            free,
            summary: summary.to_string(),
        })
    }

    [
        event(
            "ev-digital-fair",
            "Digital & Tech Jobs Fair",
            JobFair,
            "Newcastle",
            (2026, 11, 12),
            false,
            true,
            "Meet over 40 tech employers hiring for entry-level and experienced roles.",
        ),
        event(
            "ev-cv-clinic",
            "CV Clinic",
            Webinar,
            "Online",
            (2026, 11, 4),
            true,
            true,
            "Get live feedback on your CV from careers advisers.",
        ),
        event(
            "ev-green-open-day",
            "Green Energy Open Day",
            OpenDay,
            "Blyth",
            (2026, 11, 21),
            false,
            true,
            "Tour the offshore training centre and hear about apprenticeships in renewables.",
        ),
        event(
            "ev-nhs-talk",
            "Careers in the NHS",
            CareersTalk,
            "Sunderland",
            (2026, 12, 2),
            false,
            true,
            "Healthcare professionals talk about routes into nursing and allied health.",
        ),
        event(
            "ev-interview-skills",
            "Interview Skills Workshop",
            Workshop,
            "Middlesbrough",
            (2026, 11, 18),
            false,
            false,
            "A practical half-day session on preparing for and performing at interview.",
        ),
        event(
            "ev-women-in-construction",
            "Women in Construction Networking",
            Networking,
            "Durham",
            (2026, 12, 9),
            false,
            true,
            "Connect with women working across the construction sector.",
        ),
        event(
            "ev-hospitality-fair",
            "Hospitality Recruitment Day",
            JobFair,
            "Newcastle",
            (2027, 1, 20),
            false,
            true,
            "Hotels, restaurants and venues recruiting for the new season.",
        ),
        event(
            "ev-bootcamp-info",
            "Skills Bootcamps Information Session",
            Webinar,
            "Online",
            (2027, 1, 13),
            true,
            true,
            "Find out how free Skills Bootcamps work and how to apply.",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_date_is_valid() {
        assert_eq!(events().len(), 8);
    }

    #[test]
    fn test_two_stages_of_five_questions() {
        let qs = questions();
        assert_eq!(qs.iter().filter(|q| q.stage == 1).count(), 5);
        assert_eq!(qs.iter().filter(|q| q.stage == 2).count(), 5);
    }

    #[test]
    fn test_general_profile_present_and_not_competing() {
        let general = profiles().into_iter().find(|p| p.tag == Tag::General).unwrap();
        assert!(general.recommended_sectors.is_empty());
    }
}
