//! Тестовый каталог магазина музыкальных инструментов.
//!
//! Даты строятся относительно `now`, чтобы фильтры "сегодня/неделя/месяц"
//! всегда имели что показать.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_order::{
    Order, OrderCustomer, OrderId, OrderLine, OrderStatus, PaymentStatus, ShippingAddress,
};
use contracts::domain::a002_product::{Product, ProductCategory, ProductStatus};
use contracts::domain::common::EntityMetadata;

fn customer(name: &str, email: &str, phone: &str) -> OrderCustomer {
    OrderCustomer {
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
    }
}

fn address(street: &str, city: &str, postal_code: &str) -> ShippingAddress {
    ShippingAddress {
        street: street.into(),
        city: city.into(),
        postal_code: postal_code.into(),
        country: "España".into(),
    }
}

struct OrderSeed {
    number: &'static str,
    customer: OrderCustomer,
    address: ShippingAddress,
    lines: Vec<OrderLine>,
    shipping_cost: f64,
    status: OrderStatus,
    payment: PaymentStatus,
    tracking: Option<&'static str>,
    notes: Option<&'static str>,
    created_ago: Duration,
    updated_ago: Duration,
}

impl OrderSeed {
    fn build(self, now: DateTime<Utc>) -> Order {
        Order::with_state(
            OrderId::new_v4(),
            self.number.into(),
            self.customer,
            self.lines,
            self.shipping_cost,
            self.status,
            self.payment,
            self.address,
            self.tracking.map(String::from),
            self.notes.map(String::from),
            EntityMetadata::with_timestamps(now - self.created_ago, now - self.updated_ago),
        )
    }
}

pub fn mock_orders(now: DateTime<Utc>) -> Vec<Order> {
    let seeds = vec![
        OrderSeed {
            number: "ORD-2024-001",
            customer: customer("María García", "maria.garcia@example.com", "+34 600 111 222"),
            address: address("Calle Mayor 10", "Madrid", "28013"),
            lines: vec![
                OrderLine::new("Guitarra Acústica Yamaha FG830", 1, 299.0),
                OrderLine::new("Cuerdas D'Addario EJ16", 2, 9.5),
            ],
            shipping_cost: 0.0,
            status: OrderStatus::Pending,
            payment: PaymentStatus::Paid,
            tracking: None,
            notes: Some("Entregar por la tarde"),
            created_ago: Duration::hours(2),
            updated_ago: Duration::hours(2),
        },
        OrderSeed {
            number: "ORD-2024-002",
            customer: customer("Javier López", "javier.lopez@example.com", "+34 611 222 333"),
            address: address("Avenida Diagonal 450", "Barcelona", "08006"),
            lines: vec![OrderLine::new("Teclado Roland FP-30X", 1, 649.0)],
            shipping_cost: 12.5,
            status: OrderStatus::Processing,
            payment: PaymentStatus::Paid,
            tracking: None,
            notes: None,
            created_ago: Duration::days(1),
            updated_ago: Duration::hours(20),
        },
        OrderSeed {
            number: "ORD-2024-003",
            customer: customer("Lucía Martín", "lucia.martin@example.com", "+34 622 333 444"),
            address: address("Calle Colón 15", "Valencia", "46004"),
            lines: vec![
                OrderLine::new("Batería Electrónica Alesis Nitro", 1, 379.0),
                OrderLine::new("Baquetas Vic Firth 5A", 3, 12.9),
            ],
            shipping_cost: 15.0,
            status: OrderStatus::Shipped,
            payment: PaymentStatus::Paid,
            tracking: Some("SEUR-88231004"),
            notes: None,
            created_ago: Duration::days(3),
            updated_ago: Duration::days(2),
        },
        OrderSeed {
            number: "ORD-2024-004",
            customer: customer("Carlos Ruiz", "carlos.ruiz@example.com", "+34 633 444 555"),
            address: address("Calle Sierpes 22", "Sevilla", "41004"),
            lines: vec![OrderLine::new("Auriculares Audio-Technica ATH-M50x", 2, 149.0)],
            shipping_cost: 5.95,
            status: OrderStatus::Delivered,
            payment: PaymentStatus::Paid,
            tracking: Some("CORREOS-PK4410"),
            notes: None,
            created_ago: Duration::days(6),
            updated_ago: Duration::days(4),
        },
        OrderSeed {
            number: "ORD-2024-005",
            customer: customer("Ana Fernández", "ana.fernandez@example.com", "+34 644 555 666"),
            address: address("Gran Vía 1", "Bilbao", "48001"),
            lines: vec![OrderLine::new("Guitarra Eléctrica Fender Player Stratocaster", 1, 799.0)],
            shipping_cost: 0.0,
            status: OrderStatus::Cancelled,
            payment: PaymentStatus::Refunded,
            tracking: None,
            notes: Some("Cancelado por el cliente"),
            created_ago: Duration::days(9),
            updated_ago: Duration::days(8),
        },
        OrderSeed {
            number: "ORD-2024-006",
            customer: customer("Pablo Sánchez", "pablo.sanchez@example.com", "+34 655 666 777"),
            address: address("Calle Real 3", "A Coruña", "15003"),
            lines: vec![
                OrderLine::new("Micrófono Shure SM58", 1, 99.0),
                OrderLine::new("Cable XLR 6m", 2, 14.5),
            ],
            shipping_cost: 4.95,
            status: OrderStatus::Pending,
            payment: PaymentStatus::Pending,
            tracking: None,
            notes: None,
            created_ago: Duration::days(12),
            updated_ago: Duration::days(12),
        },
        OrderSeed {
            number: "ORD-2024-007",
            customer: customer("Elena Torres", "elena.torres@example.com", "+34 666 777 888"),
            address: address("Calle Larios 7", "Málaga", "29005"),
            lines: vec![OrderLine::new("Ukelele Soprano Kala KA-15S", 2, 59.0)],
            shipping_cost: 4.95,
            status: OrderStatus::Processing,
            payment: PaymentStatus::Paid,
            tracking: None,
            notes: None,
            created_ago: Duration::days(15),
            updated_ago: Duration::days(14),
        },
        OrderSeed {
            number: "ORD-2024-008",
            customer: customer("Diego Navarro", "diego.navarro@example.com", "+34 677 888 999"),
            address: address("Paseo Independencia 20", "Zaragoza", "50004"),
            lines: vec![OrderLine::new("Interfaz de Audio Focusrite Scarlett 2i2", 1, 189.0)],
            shipping_cost: 0.0,
            status: OrderStatus::Shipped,
            payment: PaymentStatus::Paid,
            tracking: Some("MRW-55120987"),
            notes: None,
            created_ago: Duration::days(20),
            updated_ago: Duration::days(18),
        },
        OrderSeed {
            number: "ORD-2024-009",
            customer: customer("Sara Romero", "sara.romero@example.com", "+34 688 999 000"),
            address: address("Calle Uría 12", "Oviedo", "33003"),
            lines: vec![OrderLine::new("Afinador Korg TM-60", 1, 29.9)],
            shipping_cost: 3.5,
            status: OrderStatus::Delivered,
            payment: PaymentStatus::Paid,
            tracking: Some("CORREOS-PK9921"),
            notes: None,
            created_ago: Duration::days(25),
            updated_ago: Duration::days(21),
        },
        OrderSeed {
            number: "ORD-2024-010",
            customer: customer("Miguel Ortega", "miguel.ortega@example.com", "+34 699 000 111"),
            address: address("Calle Zapatería 4", "Pamplona", "31001"),
            lines: vec![
                OrderLine::new("Teclado Yamaha PSR-E373", 1, 199.0),
                OrderLine::new("Soporte de Teclado en X", 1, 24.9),
            ],
            shipping_cost: 9.9,
            status: OrderStatus::Pending,
            payment: PaymentStatus::Pending,
            tracking: None,
            notes: None,
            created_ago: Duration::days(29),
            updated_ago: Duration::days(29),
        },
        OrderSeed {
            number: "ORD-2024-011",
            customer: customer("Laura Jiménez", "laura.jimenez@example.com", "+34 610 123 987"),
            address: address("Calle Toro 30", "Salamanca", "37002"),
            lines: vec![OrderLine::new("Cajón Flamenco Schlagwerk", 1, 139.0)],
            shipping_cost: 7.5,
            status: OrderStatus::Delivered,
            payment: PaymentStatus::Paid,
            tracking: Some("SEUR-77010022"),
            notes: None,
            created_ago: Duration::days(40),
            updated_ago: Duration::days(35),
        },
        OrderSeed {
            number: "ORD-2024-012",
            customer: customer("Andrés Molina", "andres.molina@example.com", "+34 620 456 789"),
            address: address("Calle Ancha 9", "Cádiz", "11001"),
            lines: vec![OrderLine::new("Púas Dunlop Tortex (pack 12)", 4, 5.5)],
            shipping_cost: 2.95,
            status: OrderStatus::Cancelled,
            payment: PaymentStatus::Pending,
            tracking: None,
            notes: None,
            created_ago: Duration::days(45),
            updated_ago: Duration::days(44),
        },
    ];

    seeds.into_iter().map(|s| s.build(now)).collect()
}

struct ProductSeed {
    sku: &'static str,
    name: &'static str,
    details: &'static str,
    brand: &'static str,
    category: ProductCategory,
    price: f64,
    sale_price: Option<f64>,
    stock: u32,
    status: ProductStatus,
    featured: bool,
    age_days: i64,
}

impl ProductSeed {
    fn build(self, now: DateTime<Utc>) -> Product {
        let mut product = Product::new_for_insert(
            self.sku.into(),
            self.name.into(),
            self.details.into(),
            self.brand.into(),
            self.category,
            self.price,
            self.sale_price,
            self.stock,
            vec![format!("/images/products/{}.jpg", self.sku.to_lowercase())],
        );
        product.status = self.status;
        product.featured = self.featured;
        product.base.metadata = EntityMetadata::with_timestamps(
            now - Duration::days(self.age_days),
            now - Duration::days(self.age_days / 2),
        );
        product
    }
}

pub fn mock_products(now: DateTime<Utc>) -> Vec<Product> {
    let seeds = vec![
        ProductSeed {
            sku: "GTR-FG830",
            name: "Guitarra Acústica Yamaha FG830",
            details: "Tapa maciza de abeto, aros y fondo de palisandro",
            brand: "Yamaha",
            category: ProductCategory::Guitars,
            price: 329.0,
            sale_price: Some(299.0),
            stock: 8,
            status: ProductStatus::Active,
            featured: true,
            age_days: 120,
        },
        ProductSeed {
            sku: "GTR-STRAT",
            name: "Guitarra Eléctrica Fender Player Stratocaster",
            details: "Cuerpo de aliso, tres pastillas de bobina simple",
            brand: "Fender",
            category: ProductCategory::Guitars,
            price: 799.0,
            sale_price: None,
            stock: 3,
            status: ProductStatus::Active,
            featured: true,
            age_days: 90,
        },
        ProductSeed {
            sku: "KEY-FP30X",
            name: "Teclado Roland FP-30X",
            details: "Piano digital de 88 teclas con Bluetooth",
            brand: "Roland",
            category: ProductCategory::Keyboards,
            price: 699.0,
            sale_price: Some(649.0),
            stock: 0,
            status: ProductStatus::Active,
            featured: false,
            age_days: 200,
        },
        ProductSeed {
            sku: "KEY-PSRE373",
            name: "Teclado Yamaha PSR-E373",
            details: "Teclado portátil de 61 teclas sensibles",
            brand: "Yamaha",
            category: ProductCategory::Keyboards,
            price: 199.0,
            sale_price: None,
            stock: 12,
            status: ProductStatus::Active,
            featured: false,
            age_days: 60,
        },
        ProductSeed {
            sku: "DRM-NITRO",
            name: "Batería Electrónica Alesis Nitro",
            details: "Kit de ocho piezas con parches de malla",
            brand: "Alesis",
            category: ProductCategory::Drums,
            price: 379.0,
            sale_price: None,
            stock: 5,
            status: ProductStatus::Active,
            featured: false,
            age_days: 45,
        },
        ProductSeed {
            sku: "DRM-CAJON",
            name: "Cajón Flamenco Schlagwerk",
            details: "Cajón de abedul con bordonero ajustable",
            brand: "Schlagwerk",
            category: ProductCategory::Drums,
            price: 139.0,
            sale_price: None,
            stock: 1,
            status: ProductStatus::Inactive,
            featured: false,
            age_days: 300,
        },
        ProductSeed {
            sku: "AUD-M50X",
            name: "Auriculares Audio-Technica ATH-M50x",
            details: "Auriculares de estudio cerrados",
            brand: "Audio-Technica",
            category: ProductCategory::Audio,
            price: 169.0,
            sale_price: Some(149.0),
            stock: 25,
            status: ProductStatus::Active,
            featured: true,
            age_days: 150,
        },
        ProductSeed {
            sku: "AUD-SM58",
            name: "Micrófono Shure SM58",
            details: "Micrófono dinámico cardioide para voz",
            brand: "Shure",
            category: ProductCategory::Audio,
            price: 99.0,
            sale_price: None,
            stock: 0,
            status: ProductStatus::Inactive,
            featured: false,
            age_days: 400,
        },
        ProductSeed {
            sku: "ACC-EJ16",
            name: "Cuerdas D'Addario EJ16",
            details: "Cuerdas de bronce fosforado, calibre light",
            brand: "D'Addario",
            category: ProductCategory::Accessories,
            price: 9.5,
            sale_price: None,
            stock: 140,
            status: ProductStatus::Active,
            featured: false,
            age_days: 500,
        },
        ProductSeed {
            sku: "ACC-TM60",
            name: "Afinador Korg TM-60",
            details: "Afinador y metrónomo combinados",
            brand: "Korg",
            category: ProductCategory::Accessories,
            price: 29.9,
            sale_price: None,
            stock: 4,
            status: ProductStatus::Active,
            featured: false,
            age_days: 30,
        },
    ];

    seeds.into_iter().map(|s| s.build(now)).collect()
}
