//! Create `Rides` table.
//!
//! One row per booking; `rideID` is assigned by SQLite and never reused.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rides::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rides::RideId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rides::StartLat).custom(Alias::new("REAL")))
                    .col(ColumnDef::new(Rides::StartLong).custom(Alias::new("REAL")))
                    .col(ColumnDef::new(Rides::EndLat).custom(Alias::new("REAL")))
                    .col(ColumnDef::new(Rides::EndLong).custom(Alias::new("REAL")))
                    .col(ColumnDef::new(Rides::RiderName).text())
                    .col(ColumnDef::new(Rides::DriverName).text())
                    .col(ColumnDef::new(Rides::DriverVehicle).text())
                    .col(
                        ColumnDef::new(Rides::Created)
                            .custom(Alias::new("TIMESTAMP"))
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Rides::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Rides {
    #[sea_orm(iden = "Rides")]
    Table,
    #[sea_orm(iden = "rideID")]
    RideId,
    #[sea_orm(iden = "startLat")]
    StartLat,
    #[sea_orm(iden = "startLong")]
    StartLong,
    #[sea_orm(iden = "endLat")]
    EndLat,
    #[sea_orm(iden = "endLong")]
    EndLong,
    #[sea_orm(iden = "riderName")]
    RiderName,
    #[sea_orm(iden = "driverName")]
    DriverName,
    #[sea_orm(iden = "driverVehicle")]
    DriverVehicle,
    #[sea_orm(iden = "created")]
    Created,
}
