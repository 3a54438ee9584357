//! Fixed wording of the report. Nothing here depends on scenario data.

pub const TITLE: &str = "Retirement Analysis";

pub const ASSUMPTIONS_HEADING: &str = "Assumptions";
pub const INPUTS_COLUMN: &str = "Inputs";
pub const INCOME_COLUMN: &str = "Income";
pub const GOALS_HEADING: &str = "Financial Goals";
pub const ACCOUNTS_HEADING: &str = "Account Types";

pub const INVEST_PERIOD: &str = "Investment Period";
pub const RETIRE_PERIOD: &str = "Retirement Period";
pub const EXPECTED_RETURN: &str = "Expected Return";
pub const INFLATION_RATE: &str = "Inflation Rate";
pub const PRE_TAX_INCOME: &str = "Pre-Tax Income";
pub const POST_TAX_INCOME: &str = "Post-Tax Income";
pub const RETIREMENT_INCOME: &str = "Retirement Income";

pub const SUPPLEMENTED: &str = "Supplemented";
pub const SUSTAINABLE_RETIREMENT: &str = "Sustainable Retirement";
pub const SUSTAINABLE_RETIREMENT_TEXT: &str = "The account funds the full retirement income and \
     is drawn down to zero by the end of the retirement period.";
pub const GENERATIONAL_WEALTH: &str = "Generational Wealth";
pub const GENERATIONAL_WEALTH_TEXT: &str = "Withdrawals never reduce the inflation-adjusted \
     principal, so the account can fund retirement indefinitely and be passed on.";
pub const NOBILITY: &str = "Nobility";

pub fn supplemented_text(share: &str) -> String {
    format!(
        "The account supplies {share} of retirement income; the rest comes from other \
         sources such as Social Security or a pension."
    )
}

pub fn nobility_text(growth: &str) -> String {
    format!(
        "Beyond funding retirement indefinitely, the principal keeps growing in real \
         terms at {growth}"
    )
}

pub const ACCOUNT_TYPES: [(&str, &str); 5] = [
    (
        "Brokerage",
        "Contributions are made after tax, growth is taxed every year, and withdrawals \
         may be taxed at capital gains rates. No contribution limits.",
    ),
    (
        "Traditional IRA",
        "Contributions are made before tax, growth is tax-deferred, and withdrawals are \
         taxed as ordinary income. Annual contribution limits are low.",
    ),
    (
        "Roth IRA",
        "Contributions are made after tax; growth and qualified withdrawals are tax-free. \
         Works best when you expect a higher tax bracket in retirement.",
    ),
    (
        "Traditional 401k",
        "Employer-sponsored. Contributions are made before tax with higher limits than \
         an IRA, and withdrawals are taxed as ordinary income. Employer match lands here.",
    ),
    (
        "Roth 401k",
        "Employer-sponsored. Contributions are made after tax and qualified withdrawals \
         are tax-free. Employer match contributions still go into a Traditional 401k.",
    ),
];

pub const REQUIRED_PRINCIPAL_TITLE: &str = "Required Principal by Financial Goal";
pub const YEARLY_CONTRIBUTION_TITLE: &str = "Yearly Contribution by Financial Goal";
