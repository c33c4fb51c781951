use serde_json::json;

use crate::modules::content::application::ports::outgoing::ContentClientError;
use crate::modules::content::domain::Collection;
use crate::tests::support::mock_content_client::MockContentClient;

/// A small but complete content store: every collection has records, some
/// deliberately out of display order.
pub fn sample_content() -> MockContentClient {
    MockContentClient::new()
        .with_items(
            Collection::Stats,
            vec![
                json!({
                    "_id": "stat-projects",
                    "statisticLabel": "Projects Delivered",
                    "statisticValue": "50",
                    "unit": "+",
                    "displayOrder": 2
                }),
                json!({
                    "_id": "stat-years",
                    "statisticLabel": "Years Experience",
                    "statisticValue": "5",
                    "unit": "+",
                    "displayOrder": 1
                }),
            ],
        )
        .with_items(
            Collection::Projects,
            vec![
                json!({
                    "_id": "proj-erp",
                    "projectTitle": "ERP Platform",
                    "projectDescription": "Inventory and billing for a retail group.",
                    "rolePerformed": "Backend Lead",
                    "technologiesUsed": "C#, .NET, SQL Server"
                }),
                json!({
                    "_id": "proj-assets",
                    "projectTitle": "Asset Tracker",
                    "technologiesUsed": "Rust"
                }),
            ],
        )
        .with_items(
            Collection::Skills,
            vec![
                json!({
                    "_id": "skill-sql",
                    "skillName": "PostgreSQL",
                    "category": "Database",
                    "proficiencyLevel": 80,
                    "yearsOfExperience": 4
                }),
                json!({
                    "_id": "skill-dotnet",
                    "skillName": ".NET Core",
                    "category": "Backend",
                    "proficiencyLevel": 95,
                    "yearsOfExperience": 5
                }),
                json!({
                    "_id": "skill-git",
                    "skillName": "Git",
                    "proficiencyLevel": 70
                }),
            ],
        )
        .with_items(
            Collection::Expertise,
            vec![
                json!({
                    "_id": "exp-db",
                    "areaOfExpertise": "Database Design",
                    "proficiencyLevel": 80
                }),
                json!({
                    "_id": "exp-api",
                    "areaOfExpertise": "API Design",
                    "proficiencyLevel": 90
                }),
            ],
        )
        .with_items(
            Collection::Experience,
            vec![
                json!({
                    "_id": "job-intern",
                    "companyName": "Initech",
                    "jobTitle": "Software Intern",
                    "startDate": "2021-06-01",
                    "endDate": "2021-12-31"
                }),
                json!({
                    "_id": "job-acme",
                    "companyName": "Acme",
                    "jobTitle": "Senior Backend Engineer",
                    "startDate": "2023-01-15",
                    "isCurrent": true,
                    "responsibilities": "Own the billing API\nMentor the team"
                }),
            ],
        )
        .with_items(
            Collection::Certifications,
            vec![
                json!({
                    "_id": "cert-scrum",
                    "certificationName": "Scrum Basics",
                    "issuingOrganization": "Scrum.org"
                }),
                json!({
                    "_id": "cert-oca",
                    "certificationName": "OCA Java",
                    "issuingOrganization": "Oracle",
                    "dateIssued": "2020-03-01"
                }),
                json!({
                    "_id": "cert-az",
                    "certificationName": "AZ-204",
                    "issuingOrganization": "Microsoft",
                    "dateIssued": "2023-06-15",
                    "verificationUrl": "https://verify.example.com/az204"
                }),
            ],
        )
        .with_items(
            Collection::SocialLinks,
            vec![
                json!({
                    "_id": "social-mail",
                    "platformName": "Email",
                    "platformUrl": "mailto:hello@example.com",
                    "displayOrder": 2
                }),
                json!({
                    "_id": "social-gh",
                    "platformName": "GitHub",
                    "platformUrl": "https://github.com/portfolio-owner",
                    "displayOrder": 1
                }),
            ],
        )
}

/// Every collection fails with the same error.
pub fn failing_content(err: ContentClientError) -> MockContentClient {
    Collection::ALL
        .into_iter()
        .fold(MockContentClient::new(), |client, collection| {
            client.with_failure(collection, err.clone())
        })
}
