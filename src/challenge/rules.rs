// Built-in tier rules. Each check re-parses the raw input; parse errors are
// returned with `?` and reported by ChallengeSpec::validate.

use crate::error::Result;
use crate::sql::parser::Parser;
use crate::sql::statements::{insert::InsertStatement, Statement};

use super::{ChallengeRule, Opponent, Verdict};

pub const WEAPON_ARSENAL: ChallengeRule = ChallengeRule {
    prompt: weapon_arsenal_prompt,
    check: weapon_arsenal,
};

pub const SUMMON_KIN: ChallengeRule = ChallengeRule {
    prompt: summon_kin_prompt,
    check: summon_kin,
};

pub const RECITE_SELECT: ChallengeRule = ChallengeRule {
    prompt: recite_select_prompt,
    check: recite_select,
};

pub const WEAPON_OR_KIN: ChallengeRule = ChallengeRule {
    prompt: weapon_or_kin_prompt,
    check: weapon_or_kin,
};

fn parse_insert_into(input: &str, table: &str) -> Result<Option<InsertStatement>> {
    match Parser::parse_sql(input)? {
        Statement::Insert(stmt) if stmt.table == table => Ok(Some(stmt)),
        _ => Ok(None),
    }
}

fn weapon_arsenal_prompt(op: &Opponent) -> String {
    format!(
        "Boss {} (Level {}) demands an arsenal: INSERT at least 3 weapons, each with damage >= {}.",
        op.tier, op.level, op.level
    )
}

fn weapon_arsenal(op: &Opponent, input: &str) -> Result<Verdict> {
    let Some(stmt) = parse_insert_into(input, "weapons")? else {
        return Ok(Verdict::fail("Answer with INSERT INTO weapons."));
    };
    if stmt.rows.len() < 3 {
        return Ok(Verdict::fail(format!(
            "Need at least 3 weapons, got {}.",
            stmt.rows.len()
        )));
    }
    let level = f64::from(op.level);
    if stmt.rows.iter().any(|row| row.number_or("damage", 0.0) < level) {
        return Ok(Verdict::fail(format!(
            "Every weapon needs damage >= {}.",
            op.level
        )));
    }
    Ok(Verdict::Passed)
}

fn summon_kin_prompt(op: &Opponent) -> String {
    format!(
        "Boss {} (Level {}) wants company: INSERT at least 2 creatures with boss = {} and level >= {}.",
        op.tier, op.level, op.tier, op.level
    )
}

fn summon_kin(op: &Opponent, input: &str) -> Result<Verdict> {
    let Some(stmt) = parse_insert_into(input, "creatures")? else {
        return Ok(Verdict::fail("Answer with INSERT INTO creatures."));
    };
    let tier = f64::from(op.tier.get());
    let level = f64::from(op.level);
    let matching = stmt
        .rows
        .iter()
        .filter(|row| row.floored_or("boss", tier) == tier && row.floored_or("level", level) >= level)
        .count();
    if matching < 2 {
        return Ok(Verdict::fail(format!(
            "Need 2 creatures with boss = {} and level >= {}, got {}.",
            op.tier, op.level, matching
        )));
    }
    Ok(Verdict::Passed)
}

fn recite_select_prompt(op: &Opponent) -> String {
    format!(
        "Boss {} (Level {}) asks you to look around: SELECT * FROM creatures;",
        op.tier, op.level
    )
}

fn recite_select(_op: &Opponent, input: &str) -> Result<Verdict> {
    match Parser::parse_sql(input)? {
        Statement::Select(stmt) if stmt.table == "creatures" => Ok(Verdict::Passed),
        _ => Ok(Verdict::fail("Recite exactly: SELECT * FROM creatures;")),
    }
}

fn weapon_or_kin_prompt(op: &Opponent) -> String {
    format!(
        "Boss {} (Level {}) is the final guard: INSERT a weapon with damage >= {} or a creature with boss = {}.",
        op.tier,
        op.level,
        u64::from(op.level) * 2,
        op.tier
    )
}

fn weapon_or_kin(op: &Opponent, input: &str) -> Result<Verdict> {
    let normalized = input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase();

    if normalized.starts_with("INSERT INTO WEAPONS") {
        let stmt = match Parser::parse_sql(input)? {
            Statement::Insert(stmt) => stmt,
            Statement::Select(_) => return Ok(Verdict::fail("Answer with an INSERT.")),
        };
        let needed = f64::from(op.level) * 2.0;
        if stmt.rows.iter().any(|row| row.number_or("damage", 0.0) >= needed) {
            return Ok(Verdict::Passed);
        }
        return Ok(Verdict::fail(format!("A weapon needs damage >= {}.", needed)));
    }

    if normalized.starts_with("INSERT INTO CREATURES") {
        let stmt = match Parser::parse_sql(input)? {
            Statement::Insert(stmt) => stmt,
            Statement::Select(_) => return Ok(Verdict::fail("Answer with an INSERT.")),
        };
        let tier = f64::from(op.tier.get());
        if stmt.rows.iter().any(|row| row.floored_or("boss", tier) == tier) {
            return Ok(Verdict::Passed);
        }
        return Ok(Verdict::fail(format!("A creature needs boss = {}.", op.tier)));
    }

    Ok(Verdict::fail(
        "Answer with INSERT INTO weapons or INSERT INTO creatures.",
    ))
}
