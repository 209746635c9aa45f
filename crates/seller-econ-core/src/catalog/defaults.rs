use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::record::{ProductRecord, Warehouse};

/// Built-in commission table, used when no external catalog has been
/// loaded. All entries are marketplace-warehouse (FBO) products.
pub fn default_products() -> Vec<ProductRecord> {
    BUILTIN
        .iter()
        .map(|(name, commission)| ProductRecord {
            name: (*name).to_string(),
            commission_percent: *commission,
            warehouse: Warehouse::Fbo,
            category: String::new(),
        })
        .collect()
}

const BUILTIN: &[(&str, Decimal)] = &[
    // Одежда и обувь
    ("Футболка мужская", dec!(15.5)),
    ("Джинсы женские", dec!(16.0)),
    ("Кроссовки спортивные", dec!(18.0)),
    ("Куртка зимняя", dec!(17.5)),
    ("Платье летнее", dec!(16.5)),
    ("Шорты мужские", dec!(15.0)),
    // Электроника
    ("Смартфон", dec!(5.0)),
    ("Наушники беспроводные", dec!(10.0)),
    ("Зарядное устройство", dec!(15.0)),
    ("Планшет", dec!(5.5)),
    ("Смарт-часы", dec!(8.0)),
    // Красота и здоровье
    ("Крем для лица", dec!(18.0)),
    ("Шампунь", dec!(20.0)),
    ("Духи", dec!(17.0)),
    ("Масло для тела", dec!(19.0)),
    // Дом и сад
    ("Постельное белье", dec!(18.5)),
    ("Полотенце банное", dec!(19.0)),
    ("Штора для окна", dec!(17.0)),
    ("Подушка декоративная", dec!(18.0)),
    // Спорт и отдых
    ("Мяч футбольный", dec!(15.0)),
    ("Гантели", dec!(16.5)),
    ("Рюкзак спортивный", dec!(17.5)),
    // Детские товары
    ("Игрушка мягкая", dec!(20.0)),
    ("Конструктор детский", dec!(18.5)),
    ("Коляска детская", dec!(12.0)),
    ("Детская одежда", dec!(19.0)),
    // Автотовары
    ("Автомобильные коврики", dec!(17.0)),
    ("Чехлы на сиденья", dec!(18.0)),
    // Книги
    ("Книга художественная", dec!(15.0)),
    ("Детская книга", dec!(16.0)),
    // Продукты питания
    ("Чай черный", dec!(18.0)),
    ("Кофе молотый", dec!(17.5)),
    ("Сладости", dec!(19.0)),
    // Бытовая техника
    ("Утюг электрический", dec!(12.0)),
    ("Пылесос", dec!(11.0)),
    ("Микроволновка", dec!(8.5)),
    ("Кофемашина", dec!(7.0)),
    ("Блендер", dec!(13.5)),
    ("Чайник электрический", dec!(14.0)),
    // Аксессуары
    ("Сумка женская", dec!(17.0)),
    ("Ремень кожаный", dec!(18.5)),
    ("Очки солнцезащитные", dec!(16.0)),
    ("Часы наручные", dec!(12.5)),
    // Товары для дома
    ("Светильник настольный", dec!(15.0)),
    ("Ваза декоративная", dec!(19.5)),
    ("Ковер напольный", dec!(16.5)),
    ("Зеркало настенное", dec!(17.0)),
    // Косметика и парфюмерия
    ("Помада губная", dec!(20.0)),
    ("Тушь для ресниц", dec!(19.5)),
    ("Тональный крем", dec!(18.5)),
    ("Лак для ногтей", dec!(19.0)),
    // Спортивные товары
    ("Фитнес-браслет", dec!(9.0)),
    ("Йога-коврик", dec!(18.0)),
    ("Гантели разборные", dec!(15.5)),
    ("Велосипед спортивный", dec!(10.0)),
    // Компьютеры и аксессуары
    ("Клавиатура игровая", dec!(12.0)),
    ("Мышь компьютерная", dec!(13.0)),
    ("Коврик для мыши", dec!(20.0)),
    ("Веб-камера", dec!(11.5)),
    // Товары для животных
    ("Корм для собак", dec!(19.0)),
    ("Корм для кошек", dec!(19.0)),
    ("Ошейник для собаки", dec!(18.5)),
    ("Игрушка для кота", dec!(20.0)),
    // Сад и огород
    ("Семена овощные", dec!(18.0)),
    ("Удобрение для растений", dec!(17.5)),
    ("Горшок цветочный", dec!(19.5)),
    // Инструменты
    ("Дрель электрическая", dec!(10.5)),
    ("Молоток", dec!(16.0)),
    ("Отвертка набор", dec!(17.0)),
    // Канцтовары
    ("Ручка шариковая", dec!(20.0)),
    ("Блокнот", dec!(18.5)),
    ("Папка-файл", dec!(19.0)),
    // Товары для ванной
    ("Полотенце махровое", dec!(19.0)),
    ("Коврик для ванной", dec!(18.5)),
    ("Зеркало для ванной", dec!(17.0)),
];
