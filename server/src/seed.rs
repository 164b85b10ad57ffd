use std::sync::Arc;

use log::{info, Logger};

use crate::db::Db;
use crate::errors::BackendError;
use crate::recipe::{Category, Ingredient, Recipe};
use crate::session;

/// Creates the schema, fills in the recipe catalog if the table is empty
/// and sweeps expired sessions. Safe to run on every startup.
pub async fn bootstrap(
    logger: Arc<Logger>,
    db: &(dyn Db + Send + Sync),
) -> Result<(), BackendError> {
    db.ensure_schema().await?;

    if db.count_recipes().await? == 0 {
        let recipes = catalog();
        info!(logger, "Seeding recipe catalog..."; "count" => recipes.len());
        db.insert_recipes(&recipes).await?;
    } else {
        info!(logger, "Recipe catalog already seeded");
    }

    let swept = db.delete_expired_sessions(session::now()).await?;

    if swept > 0 {
        info!(logger, "Swept expired sessions"; "count" => swept);
    }

    Ok(())
}

fn ing(name: &str, amount: f64, unit: &str, p: f64, f: f64, c: f64) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        amount,
        unit: unit.to_owned(),
        p,
        f,
        c,
    }
}

/// The built-in bilingual catalog. IDs are fixed so photo and review
/// references stay stable across re-seeds of a fresh database.
pub fn catalog() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            image: "images/derevenski.jpg".into(),
            base_portions: 4,
            category: Category::Classic,
            title_uk: "Картопля по-селянськи".into(),
            description_uk: "Ароматні запечені скибочки картоплі у спеціях.".into(),
            ingredients_uk: vec![
                ing("Картопля", 1.0, "кг", 20.0, 1.0, 170.0),
                ing("Паприка", 1.0, "ст.л.", 0.5, 0.5, 3.0),
                ing("Часник", 3.0, "зуб.", 1.0, 0.0, 5.0),
                ing("Олія", 3.0, "ст.л.", 0.0, 45.0, 0.0),
                ing("Сіль, перець", 0.0, "за смаком", 0.0, 0.0, 0.0),
            ],
            instructions_uk: "1. Картоплю добре вимити (можна не чистити) і нарізати скибочками.\n2. У мисці змішати олію, вичавлений часник, паприку, сіль та перець.\n3. Додати картоплю до маринаду і добре перемішати, щоб кожна скибочка була покрита.\n4. Викласти картоплю в один шар на деко, застелене пергаментом.\n5. Запікати 30-40 хвилин при 200°C, перегорнувши один раз в середині приготування для рівномірної скоринки.".into(),
            title_en: "Country-Style Potatoes".into(),
            description_en: "Aromatic baked potato wedges with spices.".into(),
            ingredients_en: vec![
                ing("Potatoes", 1.0, "kg", 20.0, 1.0, 170.0),
                ing("Paprika", 1.0, "tbsp", 0.5, 0.5, 3.0),
                ing("Garlic", 3.0, "cloves", 1.0, 0.0, 5.0),
                ing("Vegetable Oil", 3.0, "tbsp", 0.0, 45.0, 0.0),
                ing("Salt, pepper", 0.0, "to taste", 0.0, 0.0, 0.0),
            ],
            instructions_en: "1. Wash the potatoes well (skin on is fine) and cut into wedges.\n2. In a bowl, mix oil, minced garlic, paprika, salt, and pepper.\n3. Add the potatoes to the marinade and toss well to coat each wedge.\n4. Spread the potatoes in a single layer on a baking sheet lined with parchment paper.\n5. Bake for 30-40 minutes at 200°C (400°F), flipping once halfway through for an even crust.".into(),
        },
        Recipe {
            id: 2,
            image: "images/draniki.jpg".into(),
            base_portions: 4,
            category: Category::Classic,
            title_uk: "Класичні деруни".into(),
            description_uk: "Традиційні білоруські картопляні оладки.".into(),
            ingredients_uk: vec![
                ing("Картопля (велика)", 6.0, "шт.", 18.0, 1.0, 153.0),
                ing("Цибуля", 1.0, "шт.", 1.0, 0.0, 9.0),
                ing("Яйце", 1.0, "шт.", 6.0, 5.0, 0.5),
                ing("Борошно", 2.0, "ст.л.", 5.0, 0.5, 38.0),
                ing("Олія (для смаження)", 5.0, "ст.л.", 0.0, 75.0, 0.0),
                ing("Сіль", 0.0, "за смаком", 0.0, 0.0, 0.0),
            ],
            instructions_uk: "1. Картоплю та цибулю почистити і натерти на дрібній тертці.\n2. Перекласти масу у дрібне сито або марлю і добре віджати зайву рідину.\n3. Перекласти суху масу в миску, додати яйце, борошно, сіль та перець. Добре перемішати.\n4. Розігріти сковороду з олією. Викладати масу столовою ложкою, формуючи оладки.\n5. Смажити на середньому вогні до золотистої скоринки з обох боків.".into(),
            title_en: "Classic Draniki (Potato Pancakes)".into(),
            description_en: "Traditional Belarusian potato pancakes.".into(),
            ingredients_en: vec![
                ing("Potatoes (large)", 6.0, "pcs", 18.0, 1.0, 153.0),
                ing("Onion", 1.0, "pc", 1.0, 0.0, 9.0),
                ing("Egg", 1.0, "pc", 6.0, 5.0, 0.5),
                ing("Flour", 2.0, "tbsp", 5.0, 0.5, 38.0),
                ing("Oil (for frying)", 5.0, "tbsp", 0.0, 75.0, 0.0),
                ing("Salt", 0.0, "to taste", 0.0, 0.0, 0.0),
            ],
            instructions_en: "1. Grate potatoes and onion on a fine grater.\n2. Squeeze out excess liquid.\n3. Add egg, flour, salt, and mix well.\n4. Fry on a hot pan with oil until golden brown on both sides.".into(),
        },
        Recipe {
            id: 3,
            image: "images/puree.jpg".into(),
            base_portions: 4,
            category: Category::Classic,
            title_uk: "Картопляне пюре".into(),
            description_uk: "Ніжне та повітряне пюре з молоком та маслом.".into(),
            ingredients_uk: vec![
                ing("Картопля", 1.0, "кг", 20.0, 1.0, 170.0),
                ing("Молоко", 200.0, "мл", 6.6, 7.0, 10.0),
                ing("Вершкове масло", 50.0, "г", 0.4, 41.0, 0.0),
                ing("Сіль", 0.0, "за смаком", 0.0, 0.0, 0.0),
            ],
            instructions_uk: "1. Картоплю почистити, нарізати великими шматками та відварити у підсоленій воді до готовності (близько 20 хвилин).\n2. Поки картопля вариться, підігріти молоко (не кип'ятити).\n3. Злити всю воду з картоплі.\n4. Додати вершкове масло і почати товкти.\n5. Поступово вливати тепле молоко, продовжуючи товкти до досягнення бажаної консистенції.\n6. Посолити за смаком і добре перемішати.".into(),
            title_en: "Mashed Potatoes".into(),
            description_en: "Soft and fluffy mashed potatoes with milk and butter.".into(),
            ingredients_en: vec![
                ing("Potatoes", 1.0, "kg", 20.0, 1.0, 170.0),
                ing("Milk", 200.0, "ml", 6.6, 7.0, 10.0),
                ing("Butter", 50.0, "g", 0.4, 41.0, 0.0),
                ing("Salt", 0.0, "to taste", 0.0, 0.0, 0.0),
            ],
            instructions_en: "1. Peel, chop, and boil potatoes in salted water until tender (about 20 minutes).\n2. While potatoes are boiling, heat the milk (do not boil).\n3. Drain all the water from the potatoes.\n4. Add the butter and begin to mash.\n5. Gradually pour in the warm milk, continuing to mash until you reach the desired consistency.\n6. Salt to taste and mix well.".into(),
        },
        Recipe {
            id: 4,
            image: "images/tortilla.jpg".into(),
            base_portions: 6,
            category: Category::World,
            title_uk: "Іспанська Тортилья".into(),
            description_uk: "Знаменитий іспанський омлет з картоплею та цибулею.".into(),
            ingredients_uk: vec![
                ing("Картопля", 500.0, "г", 10.0, 0.5, 85.0),
                ing("Яйця", 6.0, "шт.", 36.0, 30.0, 3.0),
                ing("Цибуля", 1.0, "шт.", 1.0, 0.0, 9.0),
                ing("Оливкова олія", 150.0, "мл", 0.0, 150.0, 0.0),
                ing("Сіль", 0.0, "за смаком", 0.0, 0.0, 0.0),
            ],
            instructions_uk: "1. Картоплю та цибулю почистити і тонко нарізати (картоплю кружальцями, цибулю півкільцями).\n2. Нагріти оливкову олію у великій сковороді. Додати картоплю та цибулю.\n3. Готувати на повільному вогні, помішуючи, 20-25 хвилин, доки картопля не стане м'якою, але не коричневою.\n4. У великій мисці збити яйця з сіллю.\n5. Вийняти картоплю та цибулю з олії шумівкою і дати стекти зайвій олії. Додати до збитих яєць.\n6. Дати суміші постояти 10-15 хвилин.\n7. На чистій сковороді розігріти трохи олії. Вилити яєчну суміш.\n8. Готувати на середньо-повільному вогні, доки краї не схопляться (близько 5-7 хвилин).\n9. Накрити сковороду великою тарілкою і впевнено перевернути тортилью на тарілку. Потім зсунути її назад у сковороду іншим боком.\n10. Готувати ще 3-5 хвилин. Подавати теплою або кімнатної температури.".into(),
            title_en: "Spanish Tortilla".into(),
            description_en: "A famous Spanish omelette with potatoes and onion.".into(),
            ingredients_en: vec![
                ing("Potatoes", 500.0, "g", 10.0, 0.5, 85.0),
                ing("Eggs", 6.0, "pcs", 36.0, 30.0, 3.0),
                ing("Onion", 1.0, "pc", 1.0, 0.0, 9.0),
                ing("Olive Oil", 150.0, "ml", 0.0, 150.0, 0.0),
                ing("Salt", 0.0, "to taste", 0.0, 0.0, 0.0),
            ],
            instructions_en: "1. Peel and thinly slice the potatoes and onion (potatoes in rounds, onion in half-moons).\n2. Heat olive oil in a large skillet. Add potatoes and onion.\n3. Cook over low heat, stirring occasionally, for 20-25 minutes until potatoes are tender but not browned.\n4. In a large bowl, beat the eggs with salt.\n5. Remove the potatoes and onion from the oil with a slotted spoon, draining excess oil. Add them to the beaten eggs.\n6. Let the mixture sit for 10-15 minutes.\n7. Heat a little oil in a clean skillet. Pour in the egg mixture.\n8. Cook on medium-low heat until the edges are set (about 5-7 minutes).\n9. Cover the skillet with a large plate and confidently flip the tortilla onto the plate. Then, slide it back into the skillet on the other side.\n10. Cook for another 3-5 minutes. Serve warm or at room temperature.".into(),
        },
        Recipe {
            id: 5,
            image: "images/borscht.jpg".into(),
            base_portions: 6,
            category: Category::Soup,
            title_uk: "Борщ (Україна)".into(),
            description_uk: "Традиційний український суп на основі буряка.".into(),
            ingredients_uk: vec![
                ing("Яловичина", 500.0, "г", 105.0, 80.0, 0.0),
                ing("Буряк", 2.0, "шт.", 3.2, 0.2, 20.0),
                ing("Картопля", 4.0, "шт.", 8.0, 0.4, 68.0),
                ing("Капуста", 300.0, "г", 3.9, 0.3, 17.0),
                ing("Морква", 1.0, "шт.", 0.9, 0.1, 7.0),
                ing("Цибуля", 1.0, "шт.", 1.1, 0.1, 9.0),
                ing("Томатна паста", 2.0, "ст.л.", 2.5, 0.2, 10.0),
            ],
            instructions_uk: "1. Зварити бульйон з м'яса (близько 1.5-2 годин).\n2. Дістати м'ясо, нарізати. Бульйон процідити.\n3. Нарізати картоплю кубиками, кинути в бульйон.\n4. Нашаткувати капусту, додати через 10 хвилин після картоплі.\n5. Зробити засмажку: натерти моркву та буряк, нарізати цибулю. Смажити цибулю та моркву на олії, потім додати буряк. Скропити оцтом (щоб зберіг колір).\n6. Додати томатну пасту, трохи бульйону і тушкувати 10-15 хв.\n7. Додати засмажку в суп. Варити ще 5-7 хвилин.\n8. Додати нарізане м'ясо, подрібнений часник, сіль, перець, лавровий лист.\n9. Дати настоятися 20 хвилин. Подавати зі сметаною та зеленню.".into(),
            title_en: "Borscht (Ukraine)".into(),
            description_en: "Traditional Ukrainian soup based on beetroot.".into(),
            ingredients_en: vec![
                ing("Beef", 500.0, "g", 105.0, 80.0, 0.0),
                ing("Beets", 2.0, "pcs", 3.2, 0.2, 20.0),
                ing("Potatoes", 4.0, "pcs", 8.0, 0.4, 68.0),
                ing("Cabbage", 300.0, "g", 3.9, 0.3, 17.0),
                ing("Carrot", 1.0, "pc", 0.9, 0.1, 7.0),
                ing("Onion", 1.0, "pc", 1.1, 0.1, 9.0),
                ing("Tomato Paste", 2.0, "tbsp", 2.5, 0.2, 10.0),
            ],
            instructions_en: "1. Boil broth from the meat (about 1.5-2 hours).\n2. Remove meat, chop. Strain the broth.\n3. Dice potatoes, add to broth.\n4. Shred cabbage, add 10 minutes after potatoes.\n5. Make the 'zasmazhka': grate carrot and beets, chop onion. Sauté onion and carrot in oil, then add beets. Sprinkle with vinegar (to retain color).\n6. Add tomato paste, a little broth, and simmer for 10-15 min.\n7. Add the 'zasmazhka' to the soup. Cook for another 5-7 minutes.\n8. Add chopped meat, minced garlic, salt, pepper, bay leaf.\n9. Let it rest for 20 minutes. Serve with sour cream and herbs.".into(),
        },
        Recipe {
            id: 6,
            image: "images/french_onion_soup.jpg".into(),
            base_portions: 4,
            category: Category::Soup,
            title_uk: "Французький цибулевий суп".into(),
            description_uk: "Класичний ситний суп.".into(),
            ingredients_uk: vec![
                ing("Цибуля", 1.0, "кг", 11.0, 1.0, 90.0),
                ing("Вершкове масло", 50.0, "г", 0.4, 41.0, 0.0),
                ing("Яловичий бульйон", 1.5, "л", 15.0, 5.0, 5.0),
                ing("Сухе біле вино", 200.0, "мл", 0.2, 0.0, 5.2),
                ing("Борошно", 1.0, "ст.л.", 2.5, 0.2, 19.0),
                ing("Багет", 1.0, "шт.", 27.0, 9.0, 150.0),
                ing("Сир Грюєр", 150.0, "г", 45.0, 49.5, 0.5),
            ],
            instructions_uk: "1. Нарізати цибулю тонкими півкільцями.\n2. У глибокій каструлі розтопити вершкове масло. Додати цибулю.\n3. Карамелізувати цибулю на повільному вогні, помішуючи, 30-40 хвилин до темно-коричневого кольору.\n4. Додати борошно, перемішати і смажити 1 хвилину.\n5. Влити вино, дати йому випаруватися наполовину.\n6. Влити гарячий яловичий бульйон. Додати сіль, перець. Варити 20 хвилин.\n7. Підсушити скибочки багета в духовці.\n8. Розлити суп у жароміцні горщики. Зверху покласти грінку, посипати тертим сиром.\n9. Поставити в розігріту до 200°C духовку (або під гриль) на 5-10 хвилин, доки сир не розплавиться і не стане золотистим.".into(),
            title_en: "French Onion Soup".into(),
            description_en: "A classic hearty soup.".into(),
            ingredients_en: vec![
                ing("Onions", 1.0, "kg", 11.0, 1.0, 90.0),
                ing("Butter", 50.0, "g", 0.4, 41.0, 0.0),
                ing("Beef Broth", 1.5, "L", 15.0, 5.0, 5.0),
                ing("Dry White Wine", 200.0, "ml", 0.2, 0.0, 5.2),
                ing("Flour", 1.0, "tbsp", 2.5, 0.2, 19.0),
                ing("Baguette", 1.0, "pc", 27.0, 9.0, 150.0),
                ing("Gruyère Cheese", 150.0, "g", 45.0, 49.5, 0.5),
            ],
            instructions_en: "1. Thinly slice the onions into half-moons.\n2. Melt the butter in a large pot. Add onions.\n3. Caramelize the onions on low heat, stirring, for 30-40 minutes until deep brown.\n4. Add flour, stir, and cook for 1 minute.\n5. Pour in the wine, let it reduce by half.\n6. Pour in the hot beef broth. Add salt, pepper. Simmer for 20 minutes.\n7. Toast baguette slices in the oven.\n8. Ladle soup into oven-safe bowls. Top with a crouton, sprinkle with grated cheese.\n9. Place in a preheated 200°C (400°F) oven (or under the broiler) for 5-10 minutes, until cheese is melted and golden.".into(),
        },
        Recipe {
            id: 7,
            image: "images/minestrone.jpg".into(),
            base_portions: 6,
            category: Category::Soup,
            title_uk: "Мінестроне (Італія)".into(),
            description_uk: "Густий італійський овочевий суп.".into(),
            ingredients_uk: vec![
                ing("Оливкова олія", 3.0, "ст.л.", 0.0, 45.0, 0.0),
                ing("Цибуля", 1.0, "шт.", 1.1, 0.1, 9.0),
                ing("Морква", 2.0, "шт.", 1.8, 0.2, 14.0),
                ing("Селера", 2.0, "стебла", 0.7, 0.1, 3.0),
                ing("Цукіні", 1.0, "шт.", 2.4, 0.6, 6.2),
                ing("Помідори (конс.)", 400.0, "г", 3.6, 0.8, 15.6),
                ing("Бульйон", 1.5, "л", 1.0, 1.0, 1.0),
                ing("Квасоля (конс.)", 400.0, "г", 24.0, 2.0, 88.0),
                ing("Паста", 100.0, "г", 13.0, 1.5, 75.0),
            ],
            instructions_uk: "1. Нарізати цибулю, моркву та селеру.\n2. У великій каструлі розігріти олію. Смажити овочі 10 хвилин.\n3. Додати часник, смажити 1 хв.\n4. Додати нарізаний цукіні, помідори та бульйон. Довести до кипіння.\n5. Зменшити вогонь, варити 15 хвилин.\n6. Додати квасолю та пасту.\n7. Варити ще 10-12 хвилин.\n8. Подавати з пармезаном.".into(),
            title_en: "Minestrone (Italy)".into(),
            description_en: "A thick Italian vegetable soup.".into(),
            ingredients_en: vec![
                ing("Olive Oil", 3.0, "tbsp", 0.0, 45.0, 0.0),
                ing("Onion", 1.0, "pc", 1.1, 0.1, 9.0),
                ing("Carrots", 2.0, "pcs", 1.8, 0.2, 14.0),
                ing("Celery", 2.0, "stalks", 0.7, 0.1, 3.0),
                ing("Zucchini", 1.0, "pc", 2.4, 0.6, 6.2),
                ing("Canned Tomatoes", 400.0, "g", 3.6, 0.8, 15.6),
                ing("Broth", 1.5, "L", 1.0, 1.0, 1.0),
                ing("Canned Beans", 400.0, "g", 24.0, 2.0, 88.0),
                ing("Small Pasta", 100.0, "g", 13.0, 1.5, 75.0),
            ],
            instructions_en: "1. Chop onion, carrots, and celery.\n2. Heat oil in a large pot. Sauté vegetables for 10 minutes.\n3. Add garlic, cook 1 min.\n4. Add chopped zucchini, tomatoes, and broth. Bring to a boil.\n5. Reduce heat, simmer 15 minutes.\n6. Add beans and pasta.\n7. Cook for 10-12 more minutes.\n8. Serve with Parmesan.".into(),
        },
        Recipe {
            id: 8,
            image: "images/ramen.jpg".into(),
            base_portions: 2,
            category: Category::Soup,
            title_uk: "Рамен (Японія)".into(),
            description_uk: "Популярний японський суп з локшиною.".into(),
            ingredients_uk: vec![
                ing("Курячий бульйон", 1.0, "л", 10.0, 5.0, 5.0),
                ing("Соєвий соус", 3.0, "ст.л.", 5.4, 0.0, 4.8),
                ing("Місо-паста", 1.0, "ст.л.", 2.0, 1.0, 4.8),
                ing("Локшина Рамен", 200.0, "г", 26.0, 3.0, 150.0),
                ing("Свинина (чашу)", 200.0, "г", 54.0, 28.0, 0.0),
                ing("Яйця (варені)", 2.0, "шт.", 12.0, 10.0, 1.0),
            ],
            instructions_uk: "1. У каструлі змішати бульйон, соєвий соус, місо-пасту. Довести до кипіння.\n2. Окремо відварити локшину.\n3. Яйця зварити (6-7 хвилин), почистити, розрізати.\n4. М'ясо нарізати.\n5. У миски викласти локшину.\n6. Залити гарячим бульйоном.\n7. Зверху викласти м'ясо, яйця, зелену цибулю.".into(),
            title_en: "Ramen (Japan)".into(),
            description_en: "A popular Japanese noodle soup.".into(),
            ingredients_en: vec![
                ing("Chicken Broth", 1.0, "L", 10.0, 5.0, 5.0),
                ing("Soy Sauce", 3.0, "tbsp", 5.4, 0.0, 4.8),
                ing("Miso Paste", 1.0, "tbsp", 2.0, 1.0, 4.8),
                ing("Ramen Noodles", 200.0, "g", 26.0, 3.0, 150.0),
                ing("Pork (Chashu)", 200.0, "g", 54.0, 28.0, 0.0),
                ing("Boiled Eggs", 2.0, "pcs", 12.0, 10.0, 1.0),
            ],
            instructions_en: "1. In a pot, combine broth, soy sauce, miso paste. Bring to a boil.\n2. Separately, cook noodles.\n3. Boil eggs (6-7 minutes), peel, and cut.\n4. Slice the meat.\n5. Divide noodles into bowls.\n6. Pour hot broth over.\n7. Top with meat, eggs, and green onions.".into(),
        },
        Recipe {
            id: 9,
            image: "images/pho_bo.jpg".into(),
            base_portions: 2,
            category: Category::Soup,
            title_uk: "Фо Бо (В'єтнам)".into(),
            description_uk: "В'єтнамський яловичий суп з локшиною.".into(),
            ingredients_uk: vec![
                ing("Яловичі кістки", 1.0, "кг", 200.0, 150.0, 0.0),
                ing("Яловича вирізка", 300.0, "г", 63.0, 48.0, 0.0),
                ing("Цибуля", 2.0, "шт.", 2.2, 0.2, 18.0),
                ing("Імбир (корінь)", 5.0, "см", 0.5, 0.2, 4.0),
                ing("Рисова локшина", 200.0, "г", 14.0, 1.0, 84.0),
            ],
            instructions_uk: "1. Обсмалити цибулю та імбир. Очистити.\n2. Кістки залити водою, довести до кипіння, злити. Промити.\n3. Залити кістки чистою водою (3-4 л), додати цибулю, імбир, спеції. Варити 3-6 годин.\n4. Процідити бульйон.\n5. Вирізку нарізати тонкими скибочками.\n6. Рисову локшину замочити.\n7. У миску викласти локшину, сиру яловичину.\n8. Залити киплячим бульйоном.\n9. Подавати з лаймом, м'ятою, кінзою.".into(),
            title_en: "Pho Bo (Vietnam)".into(),
            description_en: "A Vietnamese beef noodle soup.".into(),
            ingredients_en: vec![
                ing("Beef Bones", 1.0, "kg", 200.0, 150.0, 0.0),
                ing("Beef Sirloin", 300.0, "g", 63.0, 48.0, 0.0),
                ing("Onions", 2.0, "pcs", 2.2, 0.2, 18.0),
                ing("Ginger (root)", 5.0, "cm", 0.5, 0.2, 4.0),
                ing("Rice Noodles", 200.0, "g", 14.0, 1.0, 84.0),
            ],
            instructions_en: "1. Char onions and ginger. Peel.\n2. Cover bones with water, boil, discard water. Rinse.\n3. Cover bones with clean water (3-4 L), add onion, ginger, spices. Simmer 3-6 hours.\n4. Strain broth.\n5. Slice sirloin paper-thin.\n6. Soak rice noodles.\n7. Place noodles and raw beef in a bowl.\n8. Pour boiling hot broth over.\n9. Serve with lime, mint, cilantro.".into(),
        },
        Recipe {
            id: 10,
            image: "images/tom_yum.jpg".into(),
            base_portions: 4,
            category: Category::Soup,
            title_uk: "Том Ям (Таїланд)".into(),
            description_uk: "Гострий і кислий тайський суп з креветками.".into(),
            ingredients_uk: vec![
                ing("Креветки", 400.0, "г", 96.0, 4.0, 0.0),
                ing("Курячий бульйон", 1.0, "л", 10.0, 5.0, 5.0),
                ing("Паста Том Ям", 2.0, "ст.л.", 2.0, 10.0, 10.0),
                ing("Кокосове молоко", 200.0, "мл", 4.0, 40.0, 6.0),
                ing("Гриби", 200.0, "г", 6.0, 0.6, 6.4),
            ],
            instructions_uk: "1. У каструлі довести бульйон до кипіння.\n2. Додати пасту Том Ям.\n3. Додати нарізані гриби. Варити 5 хвилин.\n4. Додати очищені креветки. Варити 2-3 хвилини.\n5. Додати помідори чері.\n6. Влити кокосове молоко та рибний соус. Прогріти, не кип'ятити.\n7. Зняти з вогню, додати сік лайма.".into(),
            title_en: "Tom Yum (Thailand)".into(),
            description_en: "A hot and sour Thai soup with shrimp.".into(),
            ingredients_en: vec![
                ing("Shrimp", 400.0, "g", 96.0, 4.0, 0.0),
                ing("Chicken Broth", 1.0, "L", 10.0, 5.0, 5.0),
                ing("Tom Yum Paste", 2.0, "tbsp", 2.0, 10.0, 10.0),
                ing("Coconut Milk", 200.0, "ml", 4.0, 40.0, 6.0),
                ing("Mushrooms", 200.0, "g", 6.0, 0.6, 6.4),
            ],
            instructions_en: "1. In a pot, bring the broth to a boil.\n2. Add Tom Yum paste.\n3. Add sliced mushrooms. Cook 5 minutes.\n4. Add peeled shrimp. Cook 2-3 minutes.\n5. Add cherry tomatoes.\n6. Pour in coconut milk and fish sauce. Heat, do not boil.\n7. Remove from heat, add lime juice.".into(),
        },
        Recipe {
            id: 11,
            image: "images/gazpacho.jpg".into(),
            base_portions: 4,
            category: Category::Soup,
            title_uk: "Гаспачо (Іспанія)".into(),
            description_uk: "Холодний іспанський овочевий суп.".into(),
            ingredients_uk: vec![
                ing("Помідори", 1.0, "кг", 9.0, 2.0, 39.0),
                ing("Огірок", 1.0, "шт.", 1.0, 0.2, 5.4),
                ing("Болгарський перець", 1.0, "шт.", 1.3, 0.3, 6.0),
                ing("Оливкова олія", 100.0, "мл", 0.0, 100.0, 0.0),
                ing("Черствий хліб", 50.0, "г", 4.5, 1.5, 25.0),
            ],
            instructions_uk: "1. Овочі грубо нарізати.\n2. Хліб замочити у воді, віджати.\n3. Скласти овочі та хліб у блендер.\n4. Додати оливкову олію, оцет, сіль.\n5. Збити до однорідної маси.\n6. Охолодити в холодильнику щонайменше 2 години.".into(),
            title_en: "Gazpacho (Spain)".into(),
            description_en: "A cold Spanish vegetable soup.".into(),
            ingredients_en: vec![
                ing("Ripe Tomatoes", 1.0, "kg", 9.0, 2.0, 39.0),
                ing("Cucumber", 1.0, "pc", 1.0, 0.2, 5.4),
                ing("Bell Pepper", 1.0, "pc", 1.3, 0.3, 6.0),
                ing("Olive Oil", 100.0, "ml", 0.0, 100.0, 0.0),
                ing("Stale Bread", 50.0, "g", 4.5, 1.5, 25.0),
            ],
            instructions_en: "1. Roughly chop vegetables.\n2. Soak bread in water, squeeze.\n3. Place vegetables and bread in a blender.\n4. Add olive oil, vinegar, salt.\n5. Blend until smooth.\n6. Chill in the refrigerator for at least 2 hours.".into(),
        },
        Recipe {
            id: 12,
            image: "images/chicken_noodle_soup.jpg".into(),
            base_portions: 4,
            category: Category::Soup,
            title_uk: "Курячий суп з локшиною".into(),
            description_uk: "Заспокійливий класичний суп.".into(),
            ingredients_uk: vec![
                ing("Курка", 1.0, "кг", 270.0, 140.0, 0.0),
                ing("Морква", 2.0, "шт.", 1.8, 0.2, 14.0),
                ing("Селера", 2.0, "стебла", 0.7, 0.1, 3.0),
                ing("Цибуля", 1.0, "шт.", 1.1, 0.1, 9.0),
                ing("Яєчна локшина", 200.0, "г", 28.0, 4.0, 140.0),
            ],
            instructions_uk: "1. Покласти курку у каструлю, залити водою. Довести до кипіння, зняти піну.\n2. Додати цибулю, моркву, селеру. Варити 1.5 години.\n3. Вийняти курку та овочі. Бульйон процідити.\n4. Відокремити м'ясо курки від кісток, нарізати.\n5. Повернути бульйон на вогонь. Додати м'ясо.\n6. Всипати локшину і варити до готовності (5-7 хвилин).\n7. Додати сіль, перець, зелень.".into(),
            title_en: "Chicken Noodle Soup".into(),
            description_en: "A comforting classic soup.".into(),
            ingredients_en: vec![
                ing("Chicken", 1.0, "kg", 270.0, 140.0, 0.0),
                ing("Carrots", 2.0, "pcs", 1.8, 0.2, 14.0),
                ing("Celery", 2.0, "stalks", 0.7, 0.1, 3.0),
                ing("Onion", 1.0, "pc", 1.1, 0.1, 9.0),
                ing("Egg Noodles", 200.0, "g", 28.0, 4.0, 140.0),
            ],
            instructions_en: "1. Place chicken in a pot, cover with water. Bring to a boil, skim foam.\n2. Add onion, carrots, celery. Simmer 1.5 hours.\n3. Remove chicken and vegetables. Strain broth.\n4. Shred chicken meat.\n5. Return broth to pot. Add meat.\n6. Add noodles and cook until al dente (5-7 minutes).\n7. Add salt, pepper, and herbs.".into(),
        },
        Recipe {
            id: 13,
            image: "images/miso_soup.jpg".into(),
            base_portions: 4,
            category: Category::Soup,
            title_uk: "Місо-суп (Японія)".into(),
            description_uk: "Традиційний японський суп.".into(),
            ingredients_uk: vec![
                ing("Бульйон Дасі", 800.0, "мл", 2.0, 0.2, 1.0),
                ing("Місо-паста", 3.0, "ст.л.", 6.0, 3.0, 14.4),
                ing("Тофу (шовковий)", 150.0, "г", 12.0, 7.5, 4.5),
                ing("Водорості Вакаме (сухі)", 1.0, "ст.л.", 0.5, 0.1, 2.0),
            ],
            instructions_uk: "1. Замочити Вакаме у воді.\n2. Нарізати тофу кубиками.\n3. Нагріти Дасі (не кип'ятити).\n4. Розвести місо-пасту у невеликій кількості бульйону, влити у каструлю.\n5. Додати Вакаме та тофу. Прогріти 1-2 хвилини (не кип'ятити).\n6. Подавати, посипавши зеленою цибулею.".into(),
            title_en: "Miso Soup (Japan)".into(),
            description_en: "A traditional Japanese soup.".into(),
            ingredients_en: vec![
                ing("Dashi Stock", 800.0, "ml", 2.0, 0.2, 1.0),
                ing("Miso Paste", 3.0, "tbsp", 6.0, 3.0, 14.4),
                ing("Silken Tofu", 150.0, "g", 12.0, 7.5, 4.5),
                ing("Dried Wakame", 1.0, "tbsp", 0.5, 0.1, 2.0),
            ],
            instructions_en: "1. Soak Wakame in water.\n2. Cube the tofu.\n3. Heat Dashi (do not boil).\n4. Dissolve miso paste in a little broth, add to pot.\n5. Add Wakame and tofu. Heat for 1-2 minutes (do not boil).\n6. Serve, garnished with green onion.".into(),
        },
        Recipe {
            id: 14,
            image: "images/clam_chowder.jpg".into(),
            base_portions: 4,
            category: Category::Soup,
            title_uk: "Клем-чаудер (США)".into(),
            description_uk: "Густий кремовий суп з молюсків.".into(),
            ingredients_uk: vec![
                ing("Бекон", 100.0, "г", 14.0, 42.0, 1.5),
                ing("Цибуля", 1.0, "шт.", 1.1, 0.1, 9.0),
                ing("Картопля", 2.0, "шт.", 4.0, 0.2, 34.0),
                ing("Борошно", 2.0, "ст.л.", 5.0, 0.5, 38.0),
                ing("Молоко", 500.0, "мл", 16.5, 17.5, 25.0),
                ing("Вершки (20%)", 200.0, "мл", 5.0, 40.0, 8.0),
                ing("Молюски (конс.)", 200.0, "г", 28.0, 2.0, 6.0),
            ],
            instructions_uk: "1. Нарізати бекон і обсмажити. Вийняти.\n2. Нарізати цибулю. Смажити на жирі від бекону.\n3. Додати борошно, смажити 1 хвилину.\n4. Поступово влити молоко, помішуючи.\n5. Нарізати картоплю дрібними кубиками, додати в суп. Варити 15-20 хвилин.\n6. Додати вершки та молюски. Прогріти 5 хвилин.\n7. Додати сіль, перець та бекон.".into(),
            title_en: "Clam Chowder (USA)".into(),
            description_en: "A thick, creamy soup made with clams.".into(),
            ingredients_en: vec![
                ing("Bacon", 100.0, "g", 14.0, 42.0, 1.5),
                ing("Onion", 1.0, "pc", 1.1, 0.1, 9.0),
                ing("Potatoes", 2.0, "pcs", 4.0, 0.2, 34.0),
                ing("Flour", 2.0, "tbsp", 5.0, 0.5, 38.0),
                ing("Milk", 500.0, "ml", 16.5, 17.5, 25.0),
                ing("Heavy Cream (20%)", 200.0, "ml", 5.0, 40.0, 8.0),
                ing("Canned Clams", 200.0, "g", 28.0, 2.0, 6.0),
            ],
            instructions_en: "1. Dice bacon and fry. Remove.\n2. Chop onion. Sauté in bacon fat.\n3. Add flour, cook 1 minute.\n4. Gradually whisk in milk.\n5. Dice potatoes, add to soup. Cook 15-20 minutes.\n6. Add cream and clams. Heat 5 minutes.\n7. Add salt, pepper, and bacon.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::catalog;
    use crate::recipe::Category;

    #[test]
    fn catalog_has_stable_ids() {
        let recipes = catalog();

        assert_eq!(recipes.len(), 14);

        for (index, recipe) in recipes.iter().enumerate() {
            assert_eq!(recipe.id, index as i64 + 1);
        }
    }

    #[test]
    fn catalog_languages_stay_in_step() {
        for recipe in catalog() {
            assert_eq!(
                recipe.ingredients_uk.len(),
                recipe.ingredients_en.len(),
                "recipe {}",
                recipe.id
            );
            assert!(!recipe.title_uk.is_empty());
            assert!(!recipe.title_en.is_empty());
            assert!(recipe.base_portions > 0);
        }
    }

    #[test]
    fn catalog_covers_every_category() {
        let recipes = catalog();

        for category in &[Category::Classic, Category::World, Category::Soup] {
            assert!(recipes.iter().any(|r| r.category == *category));
        }
    }
}
