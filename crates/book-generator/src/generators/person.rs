//! Russian full-name fabrication for author lists.

use rand::Rng;

/// Minimum and maximum number of authors per book (inclusive).
pub const AUTHOR_COUNT_RANGE: (usize, usize) = (1, 3);

const MALE_FIRST_NAMES: &[&str] = &[
    "Александр", "Алексей", "Андрей", "Борис", "Василий", "Виктор", "Владимир",
    "Геннадий", "Дмитрий", "Евгений", "Иван", "Игорь", "Константин", "Леонид",
    "Михаил", "Николай", "Олег", "Павел", "Пётр", "Сергей", "Фёдор", "Юрий",
    "Ярослав",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Анна", "Валентина", "Вера", "Галина", "Дарья", "Екатерина", "Елена",
    "Ирина", "Ксения", "Людмила", "Мария", "Надежда", "Наталья", "Ольга",
    "Светлана", "Софья", "Татьяна", "Юлия",
];

/// Patronymic stems with masculine and feminine suffixes.
const PATRONYMIC_STEMS: &[(&str, &str, &str)] = &[
    ("Александров", "ич", "на"),
    ("Алексеев", "ич", "на"),
    ("Андреев", "ич", "на"),
    ("Борисов", "ич", "на"),
    ("Викторов", "ич", "на"),
    ("Владимиров", "ич", "на"),
    ("Дмитриев", "ич", "на"),
    ("Иванов", "ич", "на"),
    ("Константинов", "ич", "на"),
    ("Михайлов", "ич", "на"),
    ("Николаев", "ич", "на"),
    ("Олегов", "ич", "на"),
    ("Павлов", "ич", "на"),
    ("Петров", "ич", "на"),
    ("Сергеев", "ич", "на"),
    ("Фёдоров", "ич", "на"),
    ("Юрьев", "ич", "на"),
    ("Иль", "ич", "инична"),
];

/// Masculine surnames ending in -ов/-ев/-ин; feminine forms add "а".
const LAST_NAMES: &[&str] = &[
    "Иванов", "Смирнов", "Кузнецов", "Попов", "Васильев", "Петров", "Соколов",
    "Михайлов", "Новиков", "Фёдоров", "Морозов", "Волков", "Алексеев", "Лебедев",
    "Семёнов", "Егоров", "Павлов", "Козлов", "Степанов", "Никитин", "Орлов",
    "Зайцев", "Белов", "Гусев", "Беляев", "Калинин", "Ильин", "Тарасов",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Male,
    Female,
}

/// Generate the author list for one book.
///
/// Duplicates are allowed.
pub fn generate_authors<R: Rng>(rng: &mut R) -> Vec<String> {
    let count = rng.random_range(AUTHOR_COUNT_RANGE.0..=AUTHOR_COUNT_RANGE.1);
    (0..count).map(|_| generate_full_name(rng)).collect()
}

/// Generate a single full name.
///
/// Formats, picked uniformly: `Last First Patronymic`,
/// `First Patronymic Last` and `First Last`.
pub fn generate_full_name<R: Rng>(rng: &mut R) -> String {
    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };

    let first = first_name(rng, gender);
    let patronymic = patronymic(rng, gender);
    let last = last_name(rng, gender);

    match rng.random_range(0..3) {
        0 => format!("{last} {first} {patronymic}"),
        1 => format!("{first} {patronymic} {last}"),
        _ => format!("{first} {last}"),
    }
}

fn first_name<R: Rng>(rng: &mut R, gender: Gender) -> &'static str {
    let pool = match gender {
        Gender::Male => MALE_FIRST_NAMES,
        Gender::Female => FEMALE_FIRST_NAMES,
    };
    pool[rng.random_range(0..pool.len())]
}

fn patronymic<R: Rng>(rng: &mut R, gender: Gender) -> String {
    let (stem, male, female) = PATRONYMIC_STEMS[rng.random_range(0..PATRONYMIC_STEMS.len())];
    match gender {
        Gender::Male => format!("{stem}{male}"),
        Gender::Female => format!("{stem}{female}"),
    }
}

fn last_name<R: Rng>(rng: &mut R, gender: Gender) -> String {
    let base = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    match gender {
        Gender::Male => base.to_string(),
        Gender::Female => format!("{base}а"),
    }
}
