use crate::{
    abstract_trait::{
        DynCategoryRepository, DynGalleryImageRepository, DynGalleryRepository, DynHashing,
        DynImageRepository, DynJwtService, DynMediaHost, DynOrderItemRepository,
        DynOrderRepository, DynPlantRepository, DynPostRatingRepository, DynPostRepository,
        DynTestimonialRepository, DynTokenRepository, DynUserRepository,
    },
    config::ConnectionPool,
    repository::{
        CategoryRepository, GalleryImageRepository, GalleryRepository, ImageRepository,
        OrderItemRepository, OrderRepository, PlantRepository, PostRatingRepository,
        PostRepository, TestimonialRepository, TokenRepository, UserRepository,
    },
    service::{
        AuthService, CategoryService, GalleryImageService, GalleryService, ImageService,
        OrderItemService, OrderService, PlantService, PostRatingService, PostService,
        TestimonialService,
    },
};
use std::{fmt, sync::Arc};

/// Composition root: concrete repositories are constructed once and handed
/// into each service as trait objects. No framework magic anywhere.
#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub plant_service: PlantService,
    pub post_service: PostService,
    pub category_service: CategoryService,
    pub image_service: ImageService,
    pub gallery_service: GalleryService,
    pub gallery_image_service: GalleryImageService,
    pub testimonial_service: TestimonialService,
    pub order_service: OrderService,
    pub order_item_service: OrderItemService,
    pub post_rating_service: PostRatingService,
    pub media: DynMediaHost,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject").finish_non_exhaustive()
    }
}

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub media: DynMediaHost,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt,
            media,
        } = deps;

        let users = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let tokens = Arc::new(TokenRepository::new(pool.clone())) as DynTokenRepository;
        let plants = Arc::new(PlantRepository::new(pool.clone())) as DynPlantRepository;
        let posts = Arc::new(PostRepository::new(pool.clone())) as DynPostRepository;
        let categories = Arc::new(CategoryRepository::new(pool.clone())) as DynCategoryRepository;
        let images = Arc::new(ImageRepository::new(pool.clone())) as DynImageRepository;
        let galleries = Arc::new(GalleryRepository::new(pool.clone())) as DynGalleryRepository;
        let gallery_images =
            Arc::new(GalleryImageRepository::new(pool.clone())) as DynGalleryImageRepository;
        let testimonials =
            Arc::new(TestimonialRepository::new(pool.clone())) as DynTestimonialRepository;
        let orders = Arc::new(OrderRepository::new(pool.clone())) as DynOrderRepository;
        let order_items =
            Arc::new(OrderItemRepository::new(pool.clone())) as DynOrderItemRepository;
        let post_ratings =
            Arc::new(PostRatingRepository::new(pool.clone())) as DynPostRatingRepository;

        let auth_service = AuthService::new(users.clone(), tokens, hash, jwt);

        let plant_service = PlantService::new(
            plants,
            images.clone(),
            categories.clone(),
            media.clone(),
        );

        let post_service =
            PostService::new(posts, users.clone(), images.clone(), media.clone());

        let category_service = CategoryService::new(categories);
        let image_service = ImageService::new(images);
        let gallery_service = GalleryService::new(galleries.clone());
        let gallery_image_service = GalleryImageService::new(gallery_images, galleries);
        let testimonial_service = TestimonialService::new(testimonials);
        let order_service = OrderService::new(orders, users);
        let order_item_service = OrderItemService::new(order_items);
        let post_rating_service = PostRatingService::new(post_ratings);

        Self {
            auth_service,
            plant_service,
            post_service,
            category_service,
            image_service,
            gallery_service,
            gallery_image_service,
            testimonial_service,
            order_service,
            order_item_service,
            post_rating_service,
            media,
        }
    }
}
