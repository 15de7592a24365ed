use super::*;

#[test]
fn personal_accounts_manage_resumes() {
    let tabs = DashboardTab::for_account(AccountType::Personal);
    assert!(tabs.contains(&DashboardTab::Resumes));
    assert!(!tabs.contains(&DashboardTab::Jobs));
}

#[test]
fn company_accounts_manage_jobs() {
    let tabs = DashboardTab::for_account(AccountType::Company);
    assert_eq!(tabs.first(), Some(&DashboardTab::Overview));
    assert!(tabs.contains(&DashboardTab::Jobs));
    assert!(!tabs.contains(&DashboardTab::Resumes));
}
