/// The three Russian noun forms selected by a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluralForms {
    /// 1, 21, 31, …: "задача"
    pub one: &'static str,
    /// 2–4, 22–24, …: "задачи"
    pub two: &'static str,
    /// everything else: "задач"
    pub many: &'static str,
}

impl PluralForms {
    pub fn pick(&self, number: u64) -> &'static str {
        noun_plural_form(number, self.one, self.two, self.many)
    }
}

pub const TASK: PluralForms = PluralForms {
    one: "задача",
    two: "задачи",
    many: "задач",
};

/// Pick the noun form that agrees with `number`.
///
/// The 11–20 check must run before the last-digit checks so that 11 selects
/// `many` even though it ends in 1.
pub fn noun_plural_form<'a>(number: u64, one: &'a str, two: &'a str, many: &'a str) -> &'a str {
    let mod10 = number % 10;
    let mod100 = number % 100;

    if (11..=20).contains(&mod100) {
        return many;
    }
    if mod10 > 5 {
        return many;
    }
    match mod10 {
        1 => one,
        2..=4 => two,
        _ => many,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(n: u64) -> &'static str {
        noun_plural_form(n, "минута", "минуты", "минут")
    }

    #[test]
    fn test_one() {
        for n in [1, 21, 31, 101, 1001] {
            assert_eq!(minutes(n), "минута", "n = {n}");
        }
    }

    #[test]
    fn test_two() {
        for n in [2, 3, 4, 22, 34, 102] {
            assert_eq!(minutes(n), "минуты", "n = {n}");
        }
    }

    #[test]
    fn test_many() {
        for n in 5..=20 {
            assert_eq!(minutes(n), "минут", "n = {n}");
        }
        for n in [0, 10, 25, 30, 100, 111, 112, 1000] {
            assert_eq!(minutes(n), "минут", "n = {n}");
        }
    }

    #[test]
    fn test_teens_ignore_last_digit() {
        assert_eq!(minutes(11), "минут");
        assert_eq!(minutes(12), "минут");
        assert_eq!(minutes(14), "минут");
        assert_eq!(minutes(211), "минут");
        assert_eq!(minutes(221), "минута");
    }

    #[test]
    fn test_task_forms() {
        assert_eq!(TASK.pick(1), "задача");
        assert_eq!(TASK.pick(3), "задачи");
        assert_eq!(TASK.pick(7), "задач");
    }
}
